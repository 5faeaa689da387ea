use crate::helpers::{self, BASE_FONT};
use crate::writer::StreamingPdfWriter;
use lopdf::{Dictionary, Object, ObjectId, dictionary};
use rollbook_layout::Page;
use rollbook_render_core::utils::get_styled_font_name;
use rollbook_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use rollbook_style::{FontWeight, Palette};
use rollbook_types::PageGeometry;
use std::collections::HashMap;
use std::io::{Seek, Write};

const DEFAULT_PDF_VERSION: &str = "1.7";

/// A streaming PDF renderer using the `lopdf` library.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
    palette: Palette,
    font_map: HashMap<String, String>,
    pdf_version: String,
    info: Option<DocumentInfo>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(palette: Palette) -> Self {
        let mut font_map = HashMap::new();
        for (i, weight) in [FontWeight::Regular, FontWeight::Bold].into_iter().enumerate() {
            font_map.insert(get_styled_font_name(BASE_FONT, weight), format!("F{}", i + 1));
        }

        Self {
            writer: None,
            palette,
            font_map,
            pdf_version: DEFAULT_PDF_VERSION.to_string(),
            info: None,
        }
    }

    pub fn with_pdf_version(mut self, version: impl Into<String>) -> Self {
        self.pdf_version = version.into();
        self
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer.as_mut().ok_or(RenderError::State("document not started"))
    }

    fn font_dict(&self) -> Dictionary {
        let mut fonts: Vec<_> = self.font_map.iter().collect();
        fonts.sort_by(|a, b| a.1.cmp(b.1));

        let mut font_dict = Dictionary::new();
        for (postscript_name, internal_name) in fonts {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => postscript_name.clone(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
        }
        font_dict
    }
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    dictionary! {
        "Title" => Object::string_literal(info.title.as_str()),
        "Creator" => Object::string_literal(info.creator.as_str()),
        "Producer" => Object::string_literal(info.producer.as_str()),
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::State("document already started"));
        }
        let font_dict = self.font_dict();
        self.writer = Some(StreamingPdfWriter::new(writer, &self.pdf_version, font_dict)?);
        Ok(())
    }

    fn set_document_info(&mut self, info: DocumentInfo) {
        self.info = Some(info);
    }

    fn render_page_content(
        &mut self,
        page: &Page,
        geometry: &PageGeometry,
    ) -> Result<ObjectId, RenderError> {
        let content = helpers::render_page_to_content(page, &self.palette, &self.font_map, geometry.height);
        log::debug!("Encoding page {} ({} operations)", page.number(), content.operations.len());
        let writer = self.writer_mut()?;
        writer.write_content_stream(content)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        geometry: &PageGeometry,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), geometry.width.into(), geometry.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        Ok(writer.write_object(page_dict.into())?)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut internal_writer = renderer
            .writer
            .take()
            .ok_or(RenderError::State("document not started or already finished"))?;
        internal_writer.set_page_ids(page_ids);
        if let Some(info) = &renderer.info {
            internal_writer.set_info(info_dictionary(info));
        }
        Ok(internal_writer.finish()?)
    }
}
