//! The fixed set of paint presets a report is drawn with.
//!
//! Layout code only ever names a [`StylePreset`]. Turning a preset into a
//! concrete color, size and weight happens once, through a [`Palette`], so the
//! layout engine never touches backend paint objects.

use crate::font::FontWeight;
use rollbook_types::Color;
use serde::Serialize;

const PRIMARY: Color = Color::from_hex(0x2E7D32);
const ACCENT: Color = Color::from_hex(0x4CAF50);
const TEXT_DARK: Color = Color::from_hex(0x212121);
const TEXT_LIGHT: Color = Color::from_hex(0x757575);
const PANEL_BACKGROUND: Color = Color::from_hex(0xF8F9FA);
const HEADER_BACKGROUND: Color = Color::from_hex(0xE8F5E8);
const ABSENT_TEXT: Color = Color::from_hex(0xC62828);
const ABSENT_ACCENT: Color = Color::from_hex(0xF44336);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    Title,
    Subtitle,
    SummaryHeading,
    SummaryPanel,
    SummaryBorder,
    StatLabel,
    StatPresent,
    StatAbsent,
    Header,
    HeaderFill,
    HeaderBorder,
    Body,
    AlternateRow,
    PresentStatus,
    AbsentStatus,
    PresentDot,
    AbsentDot,
    Footer,
}

impl StylePreset {
    pub const COUNT: usize = 18;

    pub const ALL: [StylePreset; Self::COUNT] = [
        StylePreset::Title,
        StylePreset::Subtitle,
        StylePreset::SummaryHeading,
        StylePreset::SummaryPanel,
        StylePreset::SummaryBorder,
        StylePreset::StatLabel,
        StylePreset::StatPresent,
        StylePreset::StatAbsent,
        StylePreset::Header,
        StylePreset::HeaderFill,
        StylePreset::HeaderBorder,
        StylePreset::Body,
        StylePreset::AlternateRow,
        StylePreset::PresentStatus,
        StylePreset::AbsentStatus,
        StylePreset::PresentDot,
        StylePreset::AbsentDot,
        StylePreset::Footer,
    ];

    /// Status text preset for a presence flag.
    pub fn status(present: bool) -> Self {
        if present {
            StylePreset::PresentStatus
        } else {
            StylePreset::AbsentStatus
        }
    }

    /// Status dot preset for a presence flag. The dot uses a brighter accent
    /// than the status text.
    pub fn status_dot(present: bool) -> Self {
        if present {
            StylePreset::PresentDot
        } else {
            StylePreset::AbsentDot
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn default_paint(self) -> PaintStyle {
        match self {
            StylePreset::Title => PaintStyle::text(PRIMARY, 26.0, FontWeight::Bold),
            StylePreset::Subtitle => PaintStyle::text(TEXT_LIGHT, 14.0, FontWeight::Regular),
            StylePreset::SummaryHeading => PaintStyle::text(PRIMARY, 12.0, FontWeight::Bold),
            StylePreset::SummaryPanel => PaintStyle::fill(PANEL_BACKGROUND),
            StylePreset::SummaryBorder => PaintStyle::stroke(ACCENT, 2.0),
            StylePreset::StatLabel => PaintStyle::text(TEXT_LIGHT, 11.0, FontWeight::Regular),
            StylePreset::StatPresent => PaintStyle::text(PRIMARY, 11.0, FontWeight::Regular),
            StylePreset::StatAbsent => PaintStyle::text(ABSENT_TEXT, 11.0, FontWeight::Regular),
            StylePreset::Header => PaintStyle::text(PRIMARY, 12.0, FontWeight::Bold),
            StylePreset::HeaderFill => PaintStyle::fill(HEADER_BACKGROUND),
            StylePreset::HeaderBorder => PaintStyle::stroke(PRIMARY, 1.0),
            StylePreset::Body => PaintStyle::text(TEXT_DARK, 11.0, FontWeight::Regular),
            StylePreset::AlternateRow => PaintStyle::fill(PANEL_BACKGROUND),
            StylePreset::PresentStatus => PaintStyle::text(PRIMARY, 11.0, FontWeight::Bold),
            StylePreset::AbsentStatus => PaintStyle::text(ABSENT_TEXT, 11.0, FontWeight::Bold),
            StylePreset::PresentDot => PaintStyle::fill(ACCENT),
            StylePreset::AbsentDot => PaintStyle::fill(ABSENT_ACCENT),
            StylePreset::Footer => PaintStyle::text(TEXT_LIGHT, 10.0, FontWeight::Regular),
        }
    }
}

/// A fully resolved paint: what a backend needs to draw one command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub color: Color,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub stroke_width: f32,
}

impl PaintStyle {
    fn text(color: Color, font_size: f32, font_weight: FontWeight) -> Self {
        Self { color, font_size, font_weight, stroke_width: 0.0 }
    }

    fn fill(color: Color) -> Self {
        Self { color, font_size: 0.0, font_weight: FontWeight::Regular, stroke_width: 0.0 }
    }

    fn stroke(color: Color, stroke_width: f32) -> Self {
        Self { color, font_size: 0.0, font_weight: FontWeight::Regular, stroke_width }
    }
}

/// Preset-to-paint table, built once per document.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: [PaintStyle; StylePreset::COUNT],
}

impl Palette {
    pub fn resolve(&self, preset: StylePreset) -> &PaintStyle {
        &self.entries[preset.index()]
    }

    /// Replaces the paint for one preset; every other preset keeps its entry.
    pub fn with_paint(mut self, preset: StylePreset, paint: PaintStyle) -> Self {
        self.entries[preset.index()] = paint;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: StylePreset::ALL.map(StylePreset::default_paint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_are_listed_in_declaration_order() {
        for (i, preset) in StylePreset::ALL.iter().enumerate() {
            assert_eq!(preset.index(), i, "{:?} is out of order", preset);
        }
    }

    #[test]
    fn status_presets_follow_presence() {
        assert_eq!(StylePreset::status(true), StylePreset::PresentStatus);
        assert_eq!(StylePreset::status(false), StylePreset::AbsentStatus);
        assert_eq!(StylePreset::status_dot(true), StylePreset::PresentDot);
        assert_eq!(StylePreset::status_dot(false), StylePreset::AbsentDot);
    }

    #[test]
    fn dots_use_a_different_color_than_status_text() {
        let palette = Palette::default();
        for present in [true, false] {
            let text = palette.resolve(StylePreset::status(present));
            let dot = palette.resolve(StylePreset::status_dot(present));
            assert_ne!(text.color, dot.color);
        }
    }

    #[test]
    fn palette_resolves_default_title() {
        let palette = Palette::default();
        let title = palette.resolve(StylePreset::Title);
        assert_eq!(title.font_size, 26.0);
        assert!(title.font_weight.is_bold());
        assert_eq!(title.color, PRIMARY);
    }

    #[test]
    fn override_replaces_a_single_preset() {
        let heading = PaintStyle { font_size: 30.0, ..*Palette::default().resolve(StylePreset::Title) };
        let palette = Palette::default().with_paint(StylePreset::Title, heading);

        assert_eq!(palette.resolve(StylePreset::Title).font_size, 30.0);
        assert_eq!(palette.resolve(StylePreset::Subtitle), Palette::default().resolve(StylePreset::Subtitle));
    }
}
