//! Fill colors

/// An opaque sRGB color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// CSS `#rrggbb` form for Canvas 2D fill styles
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const TOP_FACE: Color = Color::hex(0xfd1720);
    pub const UPPER_FACE: Color = Color::hex(0x301010);
    pub const LOWER_FACE: Color = Color::hex(0x501010);
    pub const LEFT_FACE: Color = Color::hex(0x801010);
    pub const RIGHT_FACE: Color = Color::hex(0x101010);
    pub const BALL: Color = Color::hex(0xf2f2f2);
}
