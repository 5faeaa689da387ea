use serde::Serialize;

/// An axis-aligned rectangle in top-left-origin, y-downward page space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rectangle from its left/top/right/bottom edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Fixed page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with a 30pt margin.
    pub const A4: PageGeometry = PageGeometry {
        width: 595.0,
        height: 842.0,
        margin: 30.0,
    };

    /// The horizontal band between the left and right margins, starting at `top`.
    pub fn content_band(&self, top: f32, height: f32) -> Rect {
        Rect::from_edges(self.margin, top, self.width - self.margin, top + height)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_band_spans_between_margins() {
        let band = PageGeometry::A4.content_band(120.0, 60.0);
        assert_eq!(band.x, 30.0);
        assert_eq!(band.width, 535.0);
        assert_eq!(band.right(), 565.0);
        assert_eq!(band.bottom(), 180.0);
    }
}
