//! Record persistence behind a small trait, with an in-memory implementation
//! that can be backed by a JSON roster file.

use crate::error::StoreError;
use rollbook_types::Record;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// The operations the report workflow needs from a roster store.
///
/// `list_all` returns records in stable insertion order; that order is the
/// order rows appear in a report.
pub trait RecordStore {
    fn list_all(&self) -> Vec<Record>;

    fn insert(&mut self, record: Record) -> Result<(), StoreError>;

    fn set_present(&mut self, id: &str, present: bool) -> Result<(), StoreError>;

    /// Marks every record absent.
    fn reset_attendance(&mut self);

    fn delete_all(&mut self);

    fn insert_all(&mut self, records: Vec<Record>) -> Result<(), StoreError> {
        for record in records {
            self.insert(record)?;
        }
        Ok(())
    }

    /// Swaps the whole roster. The store is left unchanged when `records`
    /// contains an empty or duplicate id.
    fn replace_all(&mut self, records: Vec<Record>) -> Result<(), StoreError> {
        if records.iter().any(|r| is_blank_id(&r.id)) {
            return Err(StoreError::EmptyId);
        }
        let mut seen = HashSet::new();
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id.as_str())) {
            return Err(StoreError::DuplicateId(dup.id.clone()));
        }
        self.delete_all();
        self.insert_all(records)
    }
}

fn is_blank_id(id: &str) -> bool {
    id.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loads a roster file. A file that does not exist yet is an empty roster.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Roster '{}' not found, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let records: Vec<Record> = serde_json::from_str(&source)?;
        let mut store = Self::new();
        store.replace_all(records)?;
        log::debug!("Loaded {} records from '{}'", store.len(), path.display());
        Ok(store)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        log::debug!("Saved {} records to '{}'", self.records.len(), path.display());
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn list_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        if is_blank_id(&record.id) {
            return Err(StoreError::EmptyId);
        }
        if self.get(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    fn set_present(&mut self, id: &str, present: bool) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        record.present = present;
        Ok(())
    }

    fn reset_attendance(&mut self) {
        for record in &mut self.records {
            record.present = false;
        }
    }

    fn delete_all(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(ids: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for id in ids {
            store.insert(Record::absent(*id, format!("Student {}", id))).unwrap();
        }
        store
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let store = store_with(&["S003", "S001", "S002"]);
        let ids: Vec<_> = store.list_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["S003", "S001", "S002"]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut store = store_with(&["S001"]);
        let err = store.insert(Record::absent("S001", "Again")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "S001"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(matches!(store.insert(Record::absent("", "Nobody")), Err(StoreError::EmptyId)));
        assert!(matches!(store.insert(Record::absent("   ", "Nobody")), Err(StoreError::EmptyId)));
        assert!(store.is_empty());
    }

    #[test]
    fn replace_all_with_empty_id_leaves_store_untouched() {
        let mut store = store_with(&["S001"]);
        let err = store
            .replace_all(vec![Record::absent("A", "a"), Record::absent("", "b")])
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyId));
        assert_eq!(store.list_all()[0].id, "S001");
    }

    #[test]
    fn set_present_on_unknown_id_fails() {
        let mut store = store_with(&["S001"]);
        assert!(matches!(store.set_present("S999", true), Err(StoreError::UnknownId(_))));
        store.set_present("S001", true).unwrap();
        assert!(store.get("S001").unwrap().present);
    }

    #[test]
    fn reset_marks_everyone_absent() {
        let mut store = store_with(&["S001", "S002"]);
        store.set_present("S001", true).unwrap();
        store.set_present("S002", true).unwrap();
        store.reset_attendance();
        assert!(store.list_all().iter().all(|r| !r.present));
    }

    #[test]
    fn replace_all_with_duplicates_leaves_store_untouched() {
        let mut store = store_with(&["S001"]);
        let err = store
            .replace_all(vec![Record::absent("A", "a"), Record::absent("A", "b")])
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.list_all()[0].id, "S001");
    }
}
