//! Stateless painters for the fixed parts of a report page.
//!
//! Each painter appends draw commands to a page in progress. None of them
//! decide anything about pagination; that belongs to the engine.

mod page_chrome;
mod row;

pub(crate) use page_chrome::{paint_footer, paint_header_block};
pub(crate) use row::paint_row;
