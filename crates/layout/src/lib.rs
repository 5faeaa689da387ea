//! Report model and paginating layout engine.
//!
//! The engine turns an ordered roster into pages of backend-independent
//! [`DrawCommand`]s:
//! - [`compute_totals`] counts presence for the summary banner
//! - [`LayoutEngine::render`] walks the records, breaking pages on overflow
//! - [`LayoutConfig`] pins every coordinate that ends up in the output

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod model;
pub mod text;

mod elements;
mod painting;

pub use self::config::{ColumnOffsets, LayoutConfig};
pub use self::elements::{DrawCommand, Page};
pub use self::engine::{LayoutEngine, ReportLabels};
pub use self::model::{ReportTotals, compute_totals};
pub use self::text::Truncation;

// Re-export the foundation types that appear in the public API
pub use rollbook_style::StylePreset;
pub use rollbook_types::{PageGeometry, Rect, Record};

#[cfg(test)]
mod test_utils;
