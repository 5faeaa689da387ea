use crate::config::LayoutConfig;
use crate::elements::PageBuilder;
use crate::engine::ReportLabels;
use crate::model::ReportTotals;
use rollbook_style::StylePreset;

const LABEL_X: f32 = 50.0;
const TITLE_BASELINE: f32 = 60.0;
const DATE_BASELINE: f32 = 85.0;
const GENERATED_BASELINE: f32 = 100.0;

/// Top edge of the summary panel on the first page, and of the table header
/// band on every other page.
const BANNER_TOP: f32 = 120.0;
const SUMMARY_HEIGHT: f32 = 60.0;
const SUMMARY_RADIUS: f32 = 8.0;
/// Distance from the summary panel top to the table header band below it.
const SUMMARY_ADVANCE: f32 = 80.0;
const SUMMARY_HEADING_OFFSET: f32 = 20.0;
const STATS_OFFSET: f32 = 40.0;
const STAT_PRESENT_X: f32 = 160.0;
const STAT_ABSENT_X: f32 = 250.0;
const STAT_RATE_X: f32 = 330.0;

const TABLE_HEADER_HEIGHT: f32 = 30.0;
const TABLE_HEADER_RADIUS: f32 = 4.0;
const TABLE_HEADER_BASELINE_OFFSET: f32 = 20.0;

/// Distance of the footer baseline above the bottom page edge.
const FOOTER_OFFSET: f32 = 30.0;
/// Distance of the page number from the right page edge.
const PAGE_NUMBER_INSET: f32 = 100.0;

/// Title, labels, the summary banner when `totals` is given, and the table
/// header band.
pub(crate) fn paint_header_block(
    page: &mut PageBuilder,
    config: &LayoutConfig,
    labels: &ReportLabels,
    totals: Option<&ReportTotals>,
) {
    page.text(LABEL_X, TITLE_BASELINE, "ATTENDANCE REPORT", StylePreset::Title);
    page.text(LABEL_X, DATE_BASELINE, format!("Date: {}", labels.date), StylePreset::Subtitle);
    page.text(
        LABEL_X,
        GENERATED_BASELINE,
        format!("Generated: {}", labels.generated_at),
        StylePreset::Subtitle,
    );

    let mut band_top = BANNER_TOP;
    if let Some(totals) = totals {
        paint_summary(page, config, totals, band_top);
        band_top += SUMMARY_ADVANCE;
    }
    paint_table_header(page, config, band_top);
}

fn paint_summary(page: &mut PageBuilder, config: &LayoutConfig, totals: &ReportTotals, top: f32) {
    let panel = config.geometry.content_band(top, SUMMARY_HEIGHT);
    page.bordered_round_rect(panel, SUMMARY_RADIUS, StylePreset::SummaryPanel, StylePreset::SummaryBorder);
    page.text(LABEL_X, top + SUMMARY_HEADING_OFFSET, "SUMMARY", StylePreset::SummaryHeading);

    let stats_y = top + STATS_OFFSET;
    page.text(LABEL_X, stats_y, format!("Total Students: {}", totals.total), StylePreset::StatLabel);
    page.text(STAT_PRESENT_X, stats_y, format!("Present: {}", totals.present), StylePreset::StatPresent);
    page.text(STAT_ABSENT_X, stats_y, format!("Absent: {}", totals.absent), StylePreset::StatAbsent);
    page.text(
        STAT_RATE_X,
        stats_y,
        format!("Attendance Rate: {}", totals.rate_label()),
        StylePreset::StatLabel,
    );
}

fn paint_table_header(page: &mut PageBuilder, config: &LayoutConfig, top: f32) {
    let band = config.geometry.content_band(top, TABLE_HEADER_HEIGHT);
    page.bordered_round_rect(band, TABLE_HEADER_RADIUS, StylePreset::HeaderFill, StylePreset::HeaderBorder);

    let baseline = top + TABLE_HEADER_BASELINE_OFFSET;
    let columns = &config.columns;
    page.text(columns.serial, baseline, "S.No.", StylePreset::Header);
    page.text(columns.id, baseline, "Roll No.", StylePreset::Header);
    page.text(columns.name, baseline, "Student Name", StylePreset::Header);
    page.text(columns.status, baseline, "Status", StylePreset::Header);
}

pub(crate) fn paint_footer(page: &mut PageBuilder, config: &LayoutConfig) {
    let geometry = &config.geometry;
    let baseline = geometry.height - FOOTER_OFFSET;
    page.text(LABEL_X, baseline, config.footer_label.as_str(), StylePreset::Footer);
    let page_label = format!("Page {}", page.number());
    page.text(geometry.width - PAGE_NUMBER_INSET, baseline, page_label, StylePreset::Footer);
}
