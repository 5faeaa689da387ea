//! Translation of layout draw commands into PDF content-stream operators.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use rollbook_layout::{DrawCommand, Page};
use rollbook_render_core::utils::{flip_y, get_styled_font_name, to_win_ansi};
use rollbook_style::{PaintStyle, Palette};
use rollbook_types::{Color, Rect};
use std::collections::HashMap;

pub(crate) const BASE_FONT: &str = "Helvetica";
const DEFAULT_LOPDF_FONT_NAME: &str = "F1";

/// Control-point distance for approximating a quarter circle with one cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

/// Encodes every command on `page` in order, so later commands paint over earlier ones.
pub fn render_page_to_content(
    page: &Page,
    palette: &Palette,
    font_map: &HashMap<String, String>,
    page_height: f32,
) -> Content {
    let mut page_ctx = PageContext::new(page_height, palette, font_map);
    for command in page.commands() {
        page_ctx.draw_command(command);
    }
    page_ctx.finish()
}

struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
    palette: &'a Palette,
    font_map: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    fn new(page_height: f32, palette: &'a Palette, font_map: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            palette,
            font_map,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_command(&mut self, command: &DrawCommand) {
        let paint = *self.palette.resolve(command.style());
        match command {
            DrawCommand::Text { x, y, content, .. } => self.draw_text(*x, *y, content, &paint),
            DrawCommand::Rect { bounds, filled, .. } => {
                self.begin_paint(&paint, *filled);
                let y = flip_y(bounds.bottom(), self.page_height);
                self.push("re", vec![bounds.x.into(), y.into(), bounds.width.into(), bounds.height.into()]);
                self.end_paint(*filled);
            }
            DrawCommand::RoundRect { bounds, radius, filled, .. } => {
                self.begin_paint(&paint, *filled);
                self.round_rect_path(bounds, *radius);
                self.end_paint(*filled);
            }
            DrawCommand::Circle { cx, cy, r, filled, .. } => {
                self.begin_paint(&paint, *filled);
                self.circle_path(*cx, flip_y(*cy, self.page_height), *r);
                self.end_paint(*filled);
            }
        }
    }

    fn begin_paint(&mut self, paint: &PaintStyle, filled: bool) {
        if filled {
            self.set_fill_color(paint.color);
        } else {
            self.set_stroke(paint.color, paint.stroke_width);
        }
    }

    fn end_paint(&mut self, filled: bool) {
        self.push(if filled { "f" } else { "S" }, vec![]);
    }

    fn set_font(&mut self, paint: &PaintStyle) {
        let styled_font_name = get_styled_font_name(BASE_FONT, paint.font_weight);
        let internal_font_name = self
            .font_map
            .get(&styled_font_name)
            .or_else(|| self.font_map.get(BASE_FONT))
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOPDF_FONT_NAME)
            .to_string();

        if self.state.font_name != internal_font_name || self.state.font_size != paint.font_size {
            self.push(
                "Tf",
                vec![Object::Name(internal_font_name.as_bytes().to_vec()), paint.font_size.into()],
            );
            self.state.font_name = internal_font_name;
            self.state.font_size = paint.font_size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn draw_text(&mut self, x: f32, baseline_y: f32, text: &str, paint: &PaintStyle) {
        if text.trim().is_empty() {
            return;
        }
        let (encoded, lossy) = to_win_ansi(text);
        if lossy {
            log::warn!("Text '{}' has characters outside WinAnsiEncoding; they are drawn as '?'", text);
        }
        self.push("BT", vec![]);
        self.set_font(paint);
        self.set_fill_color(paint.color);
        let pdf_y = flip_y(baseline_y, self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push("m", vec![x.into(), y.into()]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push("l", vec![x.into(), y.into()]);
    }

    fn curve_to(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) {
        self.push(
            "c",
            vec![c1.0.into(), c1.1.into(), c2.0.into(), c2.1.into(), end.0.into(), end.1.into()],
        );
    }

    /// Path for a rectangle with quarter-circle corners, in PDF (y-up) space.
    fn round_rect_path(&mut self, bounds: &Rect, radius: f32) {
        let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0);
        let k = r * KAPPA;
        let left = bounds.x;
        let right = bounds.right();
        let top = flip_y(bounds.y, self.page_height);
        let bottom = flip_y(bounds.bottom(), self.page_height);

        self.move_to(left + r, bottom);
        self.line_to(right - r, bottom);
        self.curve_to((right - r + k, bottom), (right, bottom + r - k), (right, bottom + r));
        self.line_to(right, top - r);
        self.curve_to((right, top - r + k), (right - r + k, top), (right - r, top));
        self.line_to(left + r, top);
        self.curve_to((left + r - k, top), (left, top - r + k), (left, top - r));
        self.line_to(left, bottom + r);
        self.curve_to((left, bottom + r - k), (left + r - k, bottom), (left + r, bottom));
        self.push("h", vec![]);
    }

    fn circle_path(&mut self, cx: f32, cy: f32, r: f32) {
        let k = r * KAPPA;
        self.move_to(cx + r, cy);
        self.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
        self.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
        self.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
        self.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
        self.push("h", vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_layout::{LayoutEngine, Record, ReportLabels};

    fn font_map() -> HashMap<String, String> {
        HashMap::from([
            ("Helvetica".to_string(), "F1".to_string()),
            ("Helvetica-Bold".to_string(), "F2".to_string()),
        ])
    }

    fn first_page(records: &[Record]) -> Page {
        let labels = ReportLabels::new("19-10-2026", "Oct 19, 2026 at 09:30");
        LayoutEngine::default().render(records, &labels).remove(0)
    }

    fn operators(content: &Content) -> Vec<&str> {
        content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn title_is_drawn_bold_at_flipped_baseline() {
        let page = first_page(&[]);
        let content = render_page_to_content(&page, &Palette::default(), &font_map(), 842.0);

        let tf = content.operations.iter().find(|op| op.operator == "Tf").unwrap();
        assert_eq!(tf.operands[0], Object::Name(b"F2".to_vec()));
        let td = content.operations.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands, vec![Object::Real(50.0), Object::Real(782.0)]);
    }

    #[test]
    fn text_objects_are_balanced() {
        let page = first_page(&[Record::new("S001", "Alice", true), Record::absent("S002", "Bob")]);
        let content = render_page_to_content(&page, &Palette::default(), &font_map(), 842.0);
        let ops = operators(&content);

        let begins = ops.iter().filter(|op| **op == "BT").count();
        let ends = ops.iter().filter(|op| **op == "ET").count();
        assert_eq!(begins, ends);
        assert_eq!(begins, page.texts().filter(|t| !t.trim().is_empty()).count());
    }

    #[test]
    fn circles_use_four_bezier_segments() {
        let palette = Palette::default();
        let fonts = HashMap::new();
        let mut page_ctx = PageContext::new(842.0, &palette, &fonts);
        page_ctx.circle_path(465.0, 600.0, 3.5);
        let content = page_ctx.finish();
        let ops = operators(&content);
        assert_eq!(ops.iter().filter(|op| **op == "c").count(), 4);
        assert_eq!(ops.first(), Some(&"m"));
        assert_eq!(ops.last(), Some(&"h"));
    }

    #[test]
    fn repeated_fill_color_is_not_reemitted() {
        let palette = Palette::default();
        let fonts = HashMap::new();
        let mut page_ctx = PageContext::new(842.0, &palette, &fonts);
        page_ctx.set_fill_color(Color::from_hex(0x2E7D32));
        page_ctx.set_fill_color(Color::from_hex(0x2E7D32));
        page_ctx.set_fill_color(Color::WHITE);
        let content = page_ctx.finish();
        assert_eq!(operators(&content), vec!["rg", "rg"]);
    }

    #[test]
    fn missing_font_falls_back_to_first_font() {
        let palette = Palette::default();
        let fonts = HashMap::new();
        let mut page_ctx = PageContext::new(842.0, &palette, &fonts);
        let paint = *palette.resolve(rollbook_style::StylePreset::Title);
        page_ctx.draw_text(10.0, 10.0, "x", &paint);
        let content = page_ctx.finish();
        let tf = content.operations.iter().find(|op| op.operator == "Tf").unwrap();
        assert_eq!(tf.operands[0], Object::Name(b"F1".to_vec()));
    }

    #[test]
    fn blank_text_emits_nothing() {
        let palette = Palette::default();
        let fonts = font_map();
        let mut page_ctx = PageContext::new(842.0, &palette, &fonts);
        let paint = *palette.resolve(rollbook_style::StylePreset::Body);
        page_ctx.draw_text(10.0, 10.0, "   ", &paint);
        assert!(page_ctx.finish().operations.is_empty());
    }
}
