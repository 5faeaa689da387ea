use serde::Serialize;

/// The two weights the report uses. Both map onto standard PDF base fonts,
/// so no font files are ever embedded.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}
