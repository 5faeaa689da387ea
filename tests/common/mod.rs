pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use rollbook::{ExportConfig, PipelineBuilder, Record, ReportLabels};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn labels() -> ReportLabels {
    ReportLabels::new("19-10-2026", "Oct 19, 2026 at 09:30")
}

/// `count` records; every third one is absent.
pub fn roster(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new(format!("S{:03}", i), format!("Student {}", i), i % 3 != 0))
        .collect()
}

/// Generate a PDF for `records` with the given export settings
pub fn generate_pdf_with_config(
    records: &[Record],
    config: ExportConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().with_config(config).build()?;
    let writer = pipeline.generate(records, &labels(), Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(writer.into_inner())
}

/// Generate a PDF for `records` with default settings
pub fn generate_pdf(records: &[Record]) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_config(records, ExportConfig::default())
}
