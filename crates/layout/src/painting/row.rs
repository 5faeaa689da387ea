use crate::config::LayoutConfig;
use crate::elements::PageBuilder;
use crate::text::{display_id, display_name};
use rollbook_style::StylePreset;
use rollbook_types::Record;

/// How far the alternating-row band reaches above and below the row cursor.
const BAND_ABOVE: f32 = 6.0;
const BAND_BELOW: f32 = 18.0;
const TEXT_BASELINE_OFFSET: f32 = 8.0;
const DOT_CENTER_OFFSET: f32 = 4.0;
const DOT_RADIUS: f32 = 3.5;

/// Draws one table row whose cursor is at `cursor_y`.
pub(crate) fn paint_row(
    page: &mut PageBuilder,
    config: &LayoutConfig,
    serial: u32,
    record: &Record,
    cursor_y: f32,
) {
    if serial % 2 == 0 {
        let band = config
            .geometry
            .content_band(cursor_y - BAND_ABOVE, BAND_ABOVE + BAND_BELOW);
        page.fill_rect(band, StylePreset::AlternateRow);
    }

    let columns = &config.columns;
    let baseline = cursor_y + TEXT_BASELINE_OFFSET;
    page.text(columns.serial, baseline, format!("{}.", serial), StylePreset::Body);
    page.text(
        columns.id,
        baseline,
        display_id(&record.id, &config.id_truncation),
        StylePreset::Body,
    );
    page.text(
        columns.name,
        baseline,
        display_name(&record.display_name, &config.name_truncation),
        StylePreset::Body,
    );
    page.text(
        columns.status,
        baseline,
        record.status_label(),
        StylePreset::status(record.present),
    );
    page.fill_circle(
        columns.dot,
        cursor_y + DOT_CENTER_OFFSET,
        DOT_RADIUS,
        StylePreset::status_dot(record.present),
    );
}
