use serde::{Serialize, Serializer};

/// A display color, kept in its CSS spelling alongside RGB components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    css: &'static str,
    rgb: (u8, u8, u8),
}

impl Color {
    pub const fn new(css: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { css, rgb: (r, g, b) }
    }

    pub fn css(&self) -> &'static str {
        self.css
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css)
    }
}

pub const BLACK: Color = Color::new("black", 0, 0, 0);
pub const WHITE: Color = Color::new("#FFF", 255, 255, 255);
pub const GREEN: Color = Color::new("green", 0, 128, 0);
pub const YELLOW: Color = Color::new("#FCE75D", 252, 231, 93);
pub const ORANGE: Color = Color::new("#F88137", 248, 129, 55);
pub const RED: Color = Color::new("#DC3135", 220, 49, 53);
pub const PURPLE: Color = Color::new("#53116A", 83, 17, 106);
