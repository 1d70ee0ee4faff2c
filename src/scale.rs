use serde::{Deserialize, Serialize};

use super::{color::*, error::*};

/// Returns the color at `continuous_index` along `color_scale`.
///
/// The index is a position between `0` and `len - 1`. Indices outside that range (and NaN)
/// are clamped to the nearest end of the scale; only an empty scale is an error.
pub fn map_color(color_scale: &[Color], continuous_index: f64) -> Result<Rgb, ScaleError> {
    let (&first, &last) = match (color_scale.first(), color_scale.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ScaleError::InvalidScale),
    };

    if continuous_index.is_nan() || continuous_index <= 0.0 {
        log::trace!("index {} clamped to start of scale", continuous_index);
        return Ok(first.into());
    }

    if continuous_index >= (color_scale.len() - 1) as f64 {
        log::trace!("index {} clamped to end of scale", continuous_index);
        return Ok(last.into());
    }

    let lo = continuous_index.floor();
    let hi = continuous_index.ceil();

    // lo and hi are at most one apart, so t needs no normalization
    Ok(Rgb::lerp(
        color_scale[lo as usize],
        color_scale[hi as usize],
        continuous_index - lo,
    ))
}

/// A non-empty, ordered list of colors defining a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct ColorScale {
    colors: Vec<Color>,
}

impl ColorScale {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<ColorScale, ScaleError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(ScaleError::InvalidScale);
        }
        Ok(ColorScale { colors })
    }

    /// Green, yellow, red.
    pub fn traffic_light() -> ColorScale {
        ColorScale {
            colors: vec![
                Color::rgb(0, 255, 0),
                Color::rgb(255, 255, 0),
                Color::rgb(255, 0, 0),
            ],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn sample(&self, continuous_index: f64) -> Rgb {
        match map_color(&self.colors, continuous_index) {
            Ok(c) => c,
            Err(_) => unreachable!("color scale is never empty"),
        }
    }
}

impl Default for ColorScale {
    fn default() -> ColorScale {
        ColorScale::traffic_light()
    }
}

impl TryFrom<Vec<Color>> for ColorScale {
    type Error = ScaleError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        ColorScale::new(colors)
    }
}

impl From<ColorScale> for Vec<Color> {
    fn from(scale: ColorScale) -> Self {
        scale.colors
    }
}
