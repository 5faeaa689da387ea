pub mod font;
pub mod preset;

pub use font::FontWeight;
pub use preset::{PaintStyle, Palette, StylePreset};
