use std::path::Path;
use serde::{Deserialize, Serialize};

use super::{color::*, error::*, scale::*};

/// The observed span of the values being colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatRange {
    pub min: f64,
    pub max: f64,
}

impl HeatRange {
    pub fn new(min: f64, max: f64) -> Self {
        HeatRange { min, max }
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<HeatRange> {
        values.into_iter().fold(None, |range, v| match range {
            None => Some(HeatRange::new(v, v)),
            Some(r) => Some(HeatRange::new(r.min.min(v), r.max.max(v))),
        })
    }

    /// Logarithmic position of `value` in the range, between 0 and 1.
    ///
    /// Values are shifted by one before taking the logarithm so zero is a valid input.
    /// Negative values count as zero. A range with `max <= min` maps everything to 0.
    pub fn position(&self, value: f64) -> f64 {
        let lo = self.min.max(0.0).ln_1p();
        let hi = self.max.max(0.0).ln_1p();
        if !(hi > lo) {
            return 0.0;
        }

        let p = (value.max(0.0).ln_1p() - lo) / (hi - lo);
        p.clamp(0.0, 1.0)
    }

    pub fn continuous_index(&self, value: f64, scale_len: usize) -> f64 {
        self.position(value) * scale_len.saturating_sub(1) as f64
    }
}

/// A color scale together with the alpha used when rendering it as CSS.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatMap {
    scale: ColorScale,
    alpha: f64,
}

#[derive(Deserialize)]
struct HeatMapSource {
    scale: ColorScale,
    #[serde(default = "default_alpha")]
    alpha: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl HeatMap {
    pub fn new(scale: ColorScale, alpha: f64) -> Result<HeatMap, HeatMapError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(HeatMapError::Alpha);
        }
        Ok(HeatMap { scale, alpha })
    }

    pub fn from_colors(
        colors: impl IntoIterator<Item = Color>,
        alpha: f64
    ) -> Result<HeatMap, HeatMapError> {
        HeatMap::new(ColorScale::new(colors)?, alpha)
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn with_alpha(self, alpha: f64) -> Result<HeatMap, HeatMapError> {
        HeatMap::new(self.scale, alpha)
    }

    pub fn color_for(&self, range: &HeatRange, value: f64) -> Rgb {
        self.scale.sample(range.continuous_index(value, self.scale.len()))
    }

    pub fn css_for(&self, range: &HeatRange, value: f64) -> String {
        self.color_for(range, value).to_css(self.alpha)
    }

    fn from_source(src: HeatMapSource) -> Result<HeatMap, HeatMapError> {
        HeatMap::new(src.scale, src.alpha)
    }

    pub fn from_json(src: &str) -> Result<HeatMap, HeatMapError> {
        HeatMap::from_source(serde_json::from_str(src)?)
    }

    pub fn from_ron(src: &str) -> Result<HeatMap, HeatMapError> {
        HeatMap::from_source(ron::from_str(src)?)
    }

    pub fn from_yaml(src: &str) -> Result<HeatMap, HeatMapError> {
        HeatMap::from_source(serde_yaml::from_str(src)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<HeatMap, HeatMapError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let heat_map = match path.as_ref().extension().ok_or(HeatMapError::Extension)?.to_str() {
            Some("json") => HeatMap::from_json(&contents)?,
            Some("ron") => HeatMap::from_ron(&contents)?,
            Some("yaml") | Some("yml") => HeatMap::from_yaml(&contents)?,
            _ => return Err(HeatMapError::Extension)
        };
        log::debug!(
            "loaded {} color scale from {}",
            heat_map.scale.len(),
            path.as_ref().display()
        );
        Ok(heat_map)
    }
}

impl Default for HeatMap {
    fn default() -> HeatMap {
        HeatMap { scale: ColorScale::default(), alpha: default_alpha() }
    }
}
