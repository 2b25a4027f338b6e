use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect, PixelVertex, WidgetSize};
use crate::error::{GrapherError, GrapherResult};
use crate::render::{Color, DrawingSurface, LineStrokeStyle};

/// One recorded call against a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetColor(Color),
    SetStrokeStyle(LineStrokeStyle),
    Translate { dx: f64, dy: f64 },
    FillRect(PixelRect),
    StrokeRect(PixelRect),
    Line { from: PixelPoint, to: PixelPoint },
    Polyline(Vec<PixelVertex>),
    Text { text: String, at: PixelPoint },
    SetClip(PixelRect),
    ClearClip,
}

impl DrawCommand {
    pub fn validate(&self) -> GrapherResult<()> {
        match self {
            Self::SetColor(color) => color.validate(),
            Self::SetStrokeStyle(style) => style.validate(),
            Self::Translate { dx, dy } => {
                if dx.is_finite() && dy.is_finite() {
                    Ok(())
                } else {
                    Err(invalid("translation must be finite"))
                }
            }
            Self::FillRect(rect) | Self::StrokeRect(rect) | Self::SetClip(rect) => {
                if !rect.is_finite() {
                    return Err(invalid("rectangle must be finite"));
                }
                if rect.width < 0.0 || rect.height < 0.0 {
                    return Err(invalid("rectangle extents must be >= 0"));
                }
                Ok(())
            }
            Self::Line { from, to } => {
                if from.is_finite() && to.is_finite() {
                    Ok(())
                } else {
                    Err(invalid("line coordinates must be finite"))
                }
            }
            Self::Polyline(_) | Self::ClearClip => Ok(()),
            Self::Text { text, at } => {
                if text.is_empty() {
                    return Err(invalid("text must not be empty"));
                }
                if !at.is_finite() {
                    return Err(invalid("text position must be finite"));
                }
                Ok(())
            }
        }
    }

    /// Issues this command on `surface`.
    pub fn apply(&self, surface: &mut dyn DrawingSurface) -> GrapherResult<()> {
        match self {
            Self::SetColor(color) => surface.set_color(*color),
            Self::SetStrokeStyle(style) => surface.set_stroke_style(*style),
            Self::Translate { dx, dy } => surface.translate(*dx, *dy),
            Self::FillRect(rect) => surface.fill_rect(*rect),
            Self::StrokeRect(rect) => surface.stroke_rect(*rect),
            Self::Line { from, to } => surface.draw_line(*from, *to),
            Self::Polyline(points) => surface.draw_polyline(points),
            Self::Text { text, at } => surface.draw_text(text, *at),
            Self::SetClip(rect) => surface.set_clip(*rect),
            Self::ClearClip => surface.clear_clip(),
        }
    }
}

/// Backend-agnostic, ordered draw list for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub widget: WidgetSize,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(widget: WidgetSize) -> Self {
        Self {
            widget,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn validate(&self) -> GrapherResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    /// Validates the frame, then replays every command in order.
    pub fn replay(&self, surface: &mut dyn DrawingSurface) -> GrapherResult<()> {
        self.validate()?;
        for command in &self.commands {
            command.apply(surface)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn polyline_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Polyline(_)))
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count()
    }

    /// Labels in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn invalid(message: &str) -> GrapherError {
    GrapherError::InvalidData(message.to_owned())
}
