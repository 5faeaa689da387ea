//! Paginated attendance reports.
//!
//! A roster of [`Record`]s is laid out into fixed A4 pages by
//! [`rollbook_layout::LayoutEngine`] and streamed to PDF by
//! [`rollbook_render_lopdf::LopdfRenderer`]. [`PipelineBuilder`] wires the two
//! together with the user-facing [`ExportConfig`].

pub mod error;
pub mod import;
pub mod listing;
pub mod pipeline;
pub mod store;

pub use error::{ExportError, ImportError, PipelineError, StoreError};
pub use import::{import_csv, import_csv_file, parse_csv};
pub use listing::roster_listing;
pub use pipeline::{ExportConfig, PipelineBuilder, ReportPipeline};
pub use store::{InMemoryStore, RecordStore};

pub use rollbook_layout::{LayoutConfig, LayoutEngine, Page, ReportLabels, ReportTotals, compute_totals};
pub use rollbook_types::Record;
