use serde::{Deserialize, Serialize};

/// An opaque sRGB color.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Components scaled to the `0.0..=1.0` range used by PDF color operators.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_unpacks_components() {
        assert_eq!(Color::from_hex(0x2E7D32), Color::rgb(0x2E, 0x7D, 0x32));
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
    }

    #[test]
    fn unit_rgb_scales_to_one() {
        let [r, g, b] = Color::WHITE.to_unit_rgb();
        assert_eq!((r, g, b), (1.0, 1.0, 1.0));
        assert_eq!(Color::gray(0).to_unit_rgb(), [0.0, 0.0, 0.0]);
    }
}
