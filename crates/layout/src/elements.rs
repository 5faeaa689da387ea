use rollbook_style::StylePreset;
use rollbook_types::Rect;
use serde::Serialize;

/// A backend-independent drawing instruction in top-left-origin, y-downward
/// page coordinates. Text `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32,
        content: String,
        style: StylePreset,
    },
    Rect {
        bounds: Rect,
        style: StylePreset,
        filled: bool,
    },
    RoundRect {
        bounds: Rect,
        radius: f32,
        style: StylePreset,
        filled: bool,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        style: StylePreset,
        filled: bool,
    },
}

impl DrawCommand {
    pub fn style(&self) -> StylePreset {
        match self {
            DrawCommand::Text { style, .. }
            | DrawCommand::Rect { style, .. }
            | DrawCommand::RoundRect { style, .. }
            | DrawCommand::Circle { style, .. } => *style,
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// One finished page. Pages are numbered from 1 with no gaps and are never
/// modified once the engine hands them out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    number: u32,
    commands: Vec<DrawCommand>,
}

impl Page {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text contents on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text_content)
    }
}

/// A page that is still being drawn.
pub(crate) struct PageBuilder {
    number: u32,
    commands: Vec<DrawCommand>,
}

impl PageBuilder {
    pub(crate) fn new(number: u32) -> Self {
        Self { number, commands: Vec::new() }
    }

    pub(crate) fn number(&self) -> u32 {
        self.number
    }

    pub(crate) fn text(&mut self, x: f32, y: f32, content: impl Into<String>, style: StylePreset) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            content: content.into(),
            style,
        });
    }

    pub(crate) fn fill_rect(&mut self, bounds: Rect, style: StylePreset) {
        self.commands.push(DrawCommand::Rect { bounds, style, filled: true });
    }

    /// Filled round rect plus a stroked outline on top of it.
    pub(crate) fn bordered_round_rect(
        &mut self,
        bounds: Rect,
        radius: f32,
        fill: StylePreset,
        border: StylePreset,
    ) {
        self.commands.push(DrawCommand::RoundRect { bounds, radius, style: fill, filled: true });
        self.commands.push(DrawCommand::RoundRect { bounds, radius, style: border, filled: false });
    }

    pub(crate) fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, style: StylePreset) {
        self.commands.push(DrawCommand::Circle { cx, cy, r, style, filled: true });
    }

    pub(crate) fn finish(self) -> Page {
        Page {
            number: self.number,
            commands: self.commands,
        }
    }
}
