use serde::{Deserialize, Serialize};

/// One roster entry. Identity is `id`; only `present` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub present: bool,
}

impl Record {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, present: bool) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            present,
        }
    }

    /// A freshly enrolled record, not yet marked present.
    pub fn absent(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, false)
    }

    pub fn status_label(&self) -> &'static str {
        if self.present { "Present" } else { "Absent" }
    }
}
