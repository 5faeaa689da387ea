//! Plain-text roster listing for the terminal.

use rollbook_layout::compute_totals;
use rollbook_types::Record;
use std::fmt::Write as _;

/// One line per record (`serial  id  name  status`) followed by the totals.
pub fn roster_listing(records: &[Record]) -> String {
    let mut out = String::new();
    let id_width = records.iter().map(|r| r.id.chars().count()).max().unwrap_or(0);
    let name_width = records
        .iter()
        .map(|r| r.display_name.chars().count())
        .max()
        .unwrap_or(0);

    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<id_width$}  {:<name_width$}  {}",
            i + 1,
            record.id,
            record.display_name,
            record.status_label(),
        );
    }

    let totals = compute_totals(records);
    let _ = writeln!(
        out,
        "Total: {}  Present: {}  Absent: {}  Attendance: {}",
        totals.total,
        totals.present,
        totals.absent,
        totals.rate_label()
    );
    out
}
