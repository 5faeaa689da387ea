// src/error.rs
use rollbook_render_core::RenderError;
use thiserror::Error;

/// Failures while producing a PDF report. Every variant reads as an export failure.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("export failed: no records to export")]
    NoRecords,

    #[error("export failed: {0}")]
    Render(#[from] RenderError),

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while bringing a CSV roster into a store.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("import failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("import failed: no valid rows found")]
    NoValidRows,

    #[error("import failed: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record id must not be empty")]
    EmptyId,

    #[error("a record with id '{0}' already exists")]
    DuplicateId(String),

    #[error("no record with id '{0}'")]
    UnknownId(String),

    #[error("roster file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A comprehensive error type for everything the command line can run into.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
