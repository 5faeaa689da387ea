use crate::{DrawCommand, LayoutEngine, Page, ReportLabels, StylePreset};
use rollbook_types::Record;

pub fn labels() -> ReportLabels {
    ReportLabels::new("19-10-2026", "Oct 19, 2026 at 09:30")
}

/// `count` records with ids `"1"..` and every third student absent.
pub fn roster(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new(i.to_string(), format!("Student {}", i), i % 3 != 0))
        .collect()
}

pub fn render(records: &[Record]) -> Vec<Page> {
    LayoutEngine::default().render(records, &labels())
}

/// Serial labels (`"1."`, `"2."`, ...) of the table rows on a page.
pub fn row_serials(page: &Page) -> Vec<String> {
    let serial_x = LayoutEngine::default().config().columns.serial;
    page.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text { x, content, style: StylePreset::Body, .. } if *x == serial_x => {
                Some(content.clone())
            }
            _ => None,
        })
        .collect()
}

pub fn texts_with_style(page: &Page, wanted: StylePreset) -> Vec<String> {
    page.commands()
        .iter()
        .filter(|cmd| cmd.style() == wanted)
        .filter_map(|cmd| cmd.text_content().map(str::to_string))
        .collect()
}

pub fn find_text<'a>(page: &'a Page, content: &str) -> Option<&'a DrawCommand> {
    page.commands()
        .iter()
        .find(|cmd| cmd.text_content() == Some(content))
}

pub fn count_style(page: &Page, wanted: StylePreset) -> usize {
    page.commands().iter().filter(|cmd| cmd.style() == wanted).count()
}
