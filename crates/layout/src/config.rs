use crate::text::Truncation;
use rollbook_types::PageGeometry;

/// Fixed x-offsets of the table columns, in points from the left page edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnOffsets {
    pub serial: f32,
    pub id: f32,
    pub name: f32,
    pub status: f32,
    /// Center of the status dot, just left of the status text.
    pub dot: f32,
}

impl Default for ColumnOffsets {
    fn default() -> Self {
        Self {
            serial: 45.0,
            id: 90.0,
            name: 180.0,
            status: 480.0,
            dot: 465.0,
        }
    }
}

/// Layout constants for the attendance report.
///
/// Every value here is visible in the output: coordinates end up verbatim in
/// the draw commands, and golden files pin them. Changing a default changes
/// the document.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    pub columns: ColumnOffsets,
    /// Cursor position of the first row on page 1, below the summary banner.
    ///
    /// Defaults to `240`.
    pub first_page_cursor: f32,
    /// Cursor position of the first row on every later page.
    ///
    /// Defaults to `190`.
    pub continuation_cursor: f32,
    /// Vertical distance between consecutive rows.
    ///
    /// Defaults to `22`.
    pub row_pitch: f32,
    /// Space kept free above the bottom edge. A row whose cursor lies below
    /// `geometry.height - bottom_reserve` moves to a new page.
    ///
    /// Defaults to `70`.
    pub bottom_reserve: f32,
    pub id_truncation: Truncation,
    pub name_truncation: Truncation,
    /// Application name printed in every page footer.
    pub footer_label: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::A4,
            columns: ColumnOffsets::default(),
            first_page_cursor: 240.0,
            continuation_cursor: 190.0,
            row_pitch: 22.0,
            bottom_reserve: 70.0,
            id_truncation: Truncation::new(12, 9),
            name_truncation: Truncation::new(28, 25),
            footer_label: "Simple Attendance App".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn with_footer_label(mut self, label: impl Into<String>) -> Self {
        self.footer_label = label.into();
        self
    }

    /// The lowest cursor position a row may start at without overflowing.
    pub fn overflow_line(&self) -> f32 {
        self.geometry.height - self.bottom_reserve
    }
}
