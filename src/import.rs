//! CSV roster import.
//!
//! The accepted format is one `id,name` pair per line. A first line that
//! mentions "roll" or "name" is treated as a header. Fields past the second
//! are ignored and fields are split on a literal comma, so quoted commas are
//! not supported.

use crate::error::ImportError;
use crate::store::RecordStore;
use rollbook_types::Record;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

const HEADER_MARKERS: [&str; 2] = ["roll", "name"];

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Parses roster rows. Every imported record starts absent; when an id
/// repeats, the first occurrence wins.
pub fn parse_csv(text: &str) -> Vec<Record> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if index == 0 && is_header(line) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let (Some(id), Some(name)) = (fields.next(), fields.next()) else {
            log::debug!("Skipping line {}: fewer than two fields", index + 1);
            continue;
        };
        let (id, name) = (id.trim(), name.trim());
        if id.is_empty() || name.is_empty() {
            log::debug!("Skipping line {}: empty id or name", index + 1);
            continue;
        }
        if !seen.insert(id.to_string()) {
            log::debug!("Skipping line {}: duplicate id '{}'", index + 1, id);
            continue;
        }
        records.push(Record::absent(id, name));
    }
    records
}

/// Reads a CSV roster and replaces the store contents with it.
///
/// When no valid row remains the store is not touched and
/// [`ImportError::NoValidRows`] is returned. Returns the imported count.
pub fn import_csv<S, R>(store: &mut S, mut reader: R) -> Result<usize, ImportError>
where
    S: RecordStore + ?Sized,
    R: Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let records = parse_csv(&text);
    if records.is_empty() {
        return Err(ImportError::NoValidRows);
    }
    let count = records.len();
    store.replace_all(records)?;
    log::info!("Imported {} records", count);
    Ok(count)
}

/// [`import_csv`] from a file on disk. A file that cannot be opened is an
/// [`ImportError::Io`].
pub fn import_csv_file<S>(store: &mut S, path: &Path) -> Result<usize, ImportError>
where
    S: RecordStore + ?Sized,
{
    let file = fs::File::open(path).map_err(ImportError::Io)?;
    import_csv(store, file)
}
