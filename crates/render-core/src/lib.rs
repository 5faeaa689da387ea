//! Core rendering abstractions for document encoders.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `DocumentInfo` metadata written alongside the pages
//! - Error types for rendering operations
//! - Shared utility functions for font naming and coordinate conversion

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentInfo, DocumentRenderer};
