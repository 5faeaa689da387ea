pub mod color;
pub mod geometry;
pub mod record;

pub use color::Color;
pub use geometry::{PageGeometry, Rect};
pub use record::Record;
