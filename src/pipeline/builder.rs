// src/pipeline/builder.rs
use super::config::ExportConfig;
use super::orchestrator::ReportPipeline;
use crate::error::PipelineError;
use rollbook_layout::{LayoutConfig, LayoutEngine};
use rollbook_style::Palette;
use std::path::Path;

/// A builder for creating a `ReportPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: ExportConfig,
    layout: LayoutConfig,
    palette: Palette,
}

impl PipelineBuilder {
    /// Creates a builder with the stock export settings and A4 layout.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads export settings from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = ExportConfig::from_json_file(path)?;
        Ok(self)
    }

    /// Overrides the layout constants. The footer label still comes from the export config.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Validates the configuration and creates the `ReportPipeline`.
    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        self.config.validate()?;
        let layout = self.layout.with_footer_label(self.config.footer_label.clone());
        log::debug!("Building report pipeline (PDF {})", self.config.pdf_version);
        Ok(ReportPipeline::new(LayoutEngine::new(layout), self.palette, self.config))
    }
}
