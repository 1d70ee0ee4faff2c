use serde::{Deserialize, Serialize};

/// An 8-bit RGB color, as stored in a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color { red, green, blue }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}

/// A color with real-valued components, as produced by interpolation.
///
/// Components are nominally in `0.0..=255.0` but are not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    a as f64 + (b as f64 - a as f64) * t
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Rgb { red, green, blue }
    }

    /// Interpolates between `start` and `end`. `t = 0` yields `start` exactly.
    pub fn lerp(start: Color, end: Color, t: f64) -> Self {
        Rgb {
            red: lerp(start.red, end.red, t),
            green: lerp(start.green, end.green, t),
            blue: lerp(start.blue, end.blue, t),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Renders the color as a CSS `rgba(...)` value with the given alpha.
    pub fn to_css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.red, self.green, self.blue, alpha)
    }
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        Rgb {
            red: c.red as f64,
            green: c.green as f64,
            blue: c.blue as f64,
        }
    }
}
