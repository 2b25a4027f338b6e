use serde::{Deserialize, Serialize};

use crate::error::{GrapherError, GrapherResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GrapherResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GrapherError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// On/off lengths in pixels for dashed strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on_px: f64,
    pub off_px: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(on_px: f64, off_px: f64) -> Self {
        Self { on_px, off_px }
    }

    pub fn validate(self) -> GrapherResult<()> {
        if !self.on_px.is_finite() || !self.off_px.is_finite() {
            return Err(GrapherError::InvalidData(
                "dash lengths must be finite".to_owned(),
            ));
        }
        if self.on_px <= 0.0 || self.off_px <= 0.0 {
            return Err(GrapherError::InvalidData(
                "dash lengths must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self::new(4.0, 4.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed(DashPattern),
}

impl LineStrokeStyle {
    pub fn validate(self) -> GrapherResult<()> {
        match self {
            Self::Solid => Ok(()),
            Self::Dashed(pattern) => pattern.validate(),
        }
    }
}
