use crate::error::RenderError;
use lopdf::ObjectId;
use rollbook_layout::Page;
use rollbook_types::PageGeometry;
use std::io::{Seek, Write};

/// Document-level metadata for the info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub creator: String,
    pub producer: String,
}

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Call order: `begin_document`, then `render_page_content` and
/// `write_page_object` once per page, then `finish`.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn set_document_info(&mut self, info: DocumentInfo);

    fn render_page_content(
        &mut self,
        page: &Page,
        geometry: &PageGeometry,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        geometry: &PageGeometry,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}
