use serde::{Deserialize, Serialize};

use crate::core::{DataWindow, MARGIN_PX, SAMPLE_STEP_PX, WidgetSize};
use crate::error::{GrapherError, GrapherResult};
use crate::interaction::ZOOM_STEP;
use crate::render::{Color, DashPattern};

/// Colors and stroke pattern used when building render frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrapherStyle {
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_foreground")]
    pub foreground: Color,
    #[serde(default = "default_foreground")]
    pub curve: Color,
    #[serde(default = "default_foreground")]
    pub selection: Color,
    #[serde(default)]
    pub tick_dash: DashPattern,
}

impl GrapherStyle {
    pub fn validate(self) -> GrapherResult<()> {
        self.background.validate()?;
        self.foreground.validate()?;
        self.curve.validate()?;
        self.selection.validate()?;
        self.tick_dash.validate()
    }
}

impl Default for GrapherStyle {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            curve: default_foreground(),
            selection: default_foreground(),
            tick_dash: DashPattern::default(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship plot setup as JSON. Every field has a
/// default, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrapherEngineConfig {
    #[serde(default)]
    pub widget_size: WidgetSize,
    #[serde(default = "default_margin_px")]
    pub margin_px: i32,
    #[serde(default = "default_sample_step_px")]
    pub sample_step_px: u32,
    #[serde(default)]
    pub window: DataWindow,
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    #[serde(default)]
    pub style: GrapherStyle,
}

impl GrapherEngineConfig {
    #[must_use]
    pub fn new(widget_size: WidgetSize) -> Self {
        Self {
            widget_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_window(mut self, window: DataWindow) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_margin_px(mut self, margin_px: i32) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_sample_step_px(mut self, sample_step_px: u32) -> Self {
        self.sample_step_px = sample_step_px;
        self
    }

    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GrapherStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> GrapherResult<()> {
        if self.margin_px < 0 {
            return Err(GrapherError::InvalidData(
                "margin_px must be >= 0".to_owned(),
            ));
        }
        if self.sample_step_px == 0 {
            return Err(GrapherError::InvalidData(
                "sample_step_px must be > 0".to_owned(),
            ));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(GrapherError::InvalidData(
                "zoom_step must be finite and > 0".to_owned(),
            ));
        }
        self.window.validate()?;
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> GrapherResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GrapherError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GrapherResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GrapherError::InvalidData(format!("failed to serialize config json: {e}"))
        })
    }
}

impl Default for GrapherEngineConfig {
    fn default() -> Self {
        Self {
            widget_size: WidgetSize::PREFERRED,
            margin_px: default_margin_px(),
            sample_step_px: default_sample_step_px(),
            window: DataWindow::default(),
            zoom_step: default_zoom_step(),
            style: GrapherStyle::default(),
        }
    }
}

fn default_margin_px() -> i32 {
    MARGIN_PX
}

fn default_sample_step_px() -> u32 {
    SAMPLE_STEP_PX
}

fn default_zoom_step() -> f64 {
    ZOOM_STEP
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_foreground() -> Color {
    Color::BLACK
}
