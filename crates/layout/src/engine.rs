use crate::algorithms::pagination::row_overflows;
use crate::config::LayoutConfig;
use crate::elements::{Page, PageBuilder};
use crate::model::{ReportTotals, compute_totals};
use crate::painting::{paint_footer, paint_header_block, paint_row};
use rollbook_types::Record;

/// Caller-formatted labels printed under the report title. The engine never
/// parses them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportLabels {
    pub date: String,
    pub generated_at: String,
}

impl ReportLabels {
    pub fn new(date: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            generated_at: generated_at.into(),
        }
    }
}

/// Lays out attendance reports. Holds configuration only, so one engine can
/// serve any number of independent renders, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `records` in the given order. Always yields at least one page.
    pub fn render(&self, records: &[Record], labels: &ReportLabels) -> Vec<Page> {
        let totals = compute_totals(records);
        self.render_with_totals(records, &totals, labels)
    }

    /// Same as [`LayoutEngine::render`], with totals the caller already holds.
    pub fn render_with_totals(
        &self,
        records: &[Record],
        totals: &ReportTotals,
        labels: &ReportLabels,
    ) -> Vec<Page> {
        let mut paginator = Paginator::new(&self.config, totals, labels);
        for record in records {
            paginator.push_row(record);
        }
        let pages = paginator.finish();
        log::debug!("Laid out {} records on {} page(s)", records.len(), pages.len());
        pages
    }
}

enum PaginationState {
    AwaitingFirstPage,
    InPage { page: PageBuilder, cursor_y: f32 },
}

/// Per-render pagination state machine:
/// `AwaitingFirstPage -> InPage -> (overflow -> InPage)*`, ended by
/// `finish`, which consumes the paginator.
struct Paginator<'a> {
    config: &'a LayoutConfig,
    totals: &'a ReportTotals,
    labels: &'a ReportLabels,
    state: PaginationState,
    pages: Vec<Page>,
    serial: u32,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a LayoutConfig, totals: &'a ReportTotals, labels: &'a ReportLabels) -> Self {
        Self {
            config,
            totals,
            labels,
            state: PaginationState::AwaitingFirstPage,
            pages: Vec::new(),
            serial: 1,
        }
    }

    fn push_row(&mut self, record: &Record) {
        let (mut page, mut cursor_y) =
            match std::mem::replace(&mut self.state, PaginationState::AwaitingFirstPage) {
                PaginationState::AwaitingFirstPage => self.begin_page(),
                PaginationState::InPage { page, cursor_y } => (page, cursor_y),
            };

        if row_overflows(cursor_y, self.config.overflow_line()) {
            log::debug!(
                "Page {} overflows at y={:.1} (serial {}), starting a new page",
                page.number(),
                cursor_y,
                self.serial
            );
            self.close_page(page);
            (page, cursor_y) = self.begin_page();
        }

        paint_row(&mut page, self.config, self.serial, record, cursor_y);
        self.serial += 1;
        self.state = PaginationState::InPage {
            page,
            cursor_y: cursor_y + self.config.row_pitch,
        };
    }

    /// Opens the next page and paints its header block. Only page 1 carries
    /// the summary banner.
    fn begin_page(&mut self) -> (PageBuilder, f32) {
        let number = self.pages.len() as u32 + 1;
        let is_first_page = number == 1;
        let mut page = PageBuilder::new(number);

        let summary = is_first_page.then_some(self.totals);
        paint_header_block(&mut page, self.config, self.labels, summary);

        let cursor_y = if is_first_page {
            self.config.first_page_cursor
        } else {
            self.config.continuation_cursor
        };
        (page, cursor_y)
    }

    fn close_page(&mut self, mut page: PageBuilder) {
        paint_footer(&mut page, self.config);
        self.pages.push(page.finish());
    }

    fn finish(mut self) -> Vec<Page> {
        let page = match std::mem::replace(&mut self.state, PaginationState::AwaitingFirstPage) {
            PaginationState::AwaitingFirstPage => self.begin_page().0,
            PaginationState::InPage { page, .. } => page,
        };
        self.close_page(page);
        self.pages
    }
}
