// src/pipeline/orchestrator.rs
use super::config::ExportConfig;
use crate::error::ExportError;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use rollbook_layout::{LayoutEngine, Page, ReportLabels, compute_totals};
use rollbook_render_core::{DocumentInfo, DocumentRenderer};
use rollbook_render_lopdf::LopdfRenderer;
use rollbook_style::Palette;
use rollbook_types::Record;
use std::fs;
use std::io::{self, Seek, Write};
use std::path::Path;

const PRODUCER: &str = concat!("rollbook ", env!("CARGO_PKG_VERSION"));

/// Turns a roster snapshot into a finished PDF: totals, layout, encoding.
///
/// The pipeline holds configuration only; independent exports may run
/// concurrently on one instance.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    engine: LayoutEngine,
    palette: Palette,
    config: ExportConfig,
}

impl ReportPipeline {
    pub(super) fn new(engine: LayoutEngine, palette: Palette, config: ExportConfig) -> Self {
        Self { engine, palette, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Labels for a report dated `date`, stamped with the current local time.
    pub fn labels(&self, date: impl Into<String>) -> ReportLabels {
        let generated_at = Local::now().format(&self.config.timestamp_format).to_string();
        ReportLabels::new(date, generated_at)
    }

    /// Today's date in the configured file-date format.
    pub fn today_label(&self) -> String {
        self.date_label(Local::now().date_naive())
    }

    pub fn date_label(&self, date: NaiveDate) -> String {
        date.format(&self.config.file_date_format).to_string()
    }

    /// File name the report for `date` is saved under.
    pub fn suggested_file_name(date: &str) -> String {
        format!("Attendance_{}.pdf", date)
    }

    /// Lays out the report without encoding it.
    pub fn layout(&self, records: &[Record], labels: &ReportLabels) -> Vec<Page> {
        self.engine.render(records, labels)
    }

    /// Renders `records` as a PDF into `writer` and hands the writer back.
    pub fn generate<W>(&self, records: &[Record], labels: &ReportLabels, writer: W) -> Result<W, ExportError>
    where
        W: Write + Seek + Send + 'static,
    {
        if records.is_empty() && !self.config.allow_empty_export {
            return Err(ExportError::NoRecords);
        }

        let totals = compute_totals(records);
        let pages = self.engine.render_with_totals(records, &totals, labels);
        let geometry = self.engine.config().geometry;
        debug!(
            "Encoding {} page(s) for {} records ({} present)",
            pages.len(),
            totals.total,
            totals.present
        );

        let mut renderer: Box<dyn DocumentRenderer<W>> = Box::new(
            LopdfRenderer::new(self.palette.clone()).with_pdf_version(self.config.pdf_version.as_str()),
        );
        renderer.begin_document(writer)?;
        renderer.set_document_info(DocumentInfo {
            title: format!("Attendance {}", labels.date),
            creator: "rollbook".to_string(),
            producer: PRODUCER.to_string(),
        });

        let mut page_ids = Vec::with_capacity(pages.len());
        for page in &pages {
            let content_id = renderer.render_page_content(page, &geometry)?;
            page_ids.push(renderer.write_page_object(vec![content_id], &geometry)?);
        }
        let writer = renderer.finish(page_ids)?;
        info!("Exported report with {} page(s)", pages.len());
        Ok(writer)
    }

    /// Renders into `path`. The file only appears once the whole document
    /// has been written; on any error nothing is left at `path`.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        records: &[Record],
        labels: &ReportLabels,
        path: P,
    ) -> Result<(), ExportError> {
        if records.is_empty() && !self.config.allow_empty_export {
            return Err(ExportError::NoRecords);
        }
        let output_path = path.as_ref();
        let parent_dir = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        self.write_atomically(records, labels, parent_dir, output_path)?;
        info!("Saved report to '{}'", output_path.display());
        Ok(())
    }

    #[cfg(feature = "native")]
    fn write_atomically(
        &self,
        records: &[Record],
        labels: &ReportLabels,
        parent_dir: &Path,
        output_path: &Path,
    ) -> Result<(), ExportError> {
        let temp_file = tempfile::NamedTempFile::new_in(parent_dir)?;
        debug!("Streaming report into '{}'", temp_file.path().display());
        let writer = self.generate(records, labels, io::BufWriter::new(temp_file))?;
        let temp_file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        temp_file.persist(output_path).map_err(|e| e.error)?;
        Ok(())
    }

    #[cfg(not(feature = "native"))]
    fn write_atomically(
        &self,
        records: &[Record],
        labels: &ReportLabels,
        _parent_dir: &Path,
        output_path: &Path,
    ) -> Result<(), ExportError> {
        let buffer = self.generate(records, labels, io::Cursor::new(Vec::new()))?;
        fs::write(output_path, buffer.into_inner())?;
        Ok(())
    }
}
