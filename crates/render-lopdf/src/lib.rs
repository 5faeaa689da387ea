//! Streaming PDF encoder using lopdf.
//!
//! This crate provides a streaming PDF renderer implementation using the lopdf library:
//! content streams and page objects are written to the sink as soon as each page
//! is encoded, and only the small document skeleton is buffered until `finish`.

mod helpers;
mod renderer;
mod writer;

pub use helpers::render_page_to_content;
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
