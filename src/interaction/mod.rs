use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect};

/// Zoom units applied per click or wheel notch.
pub const ZOOM_STEP: f64 = 5.0;

/// Pointer button using the conventional numbering (1 left, 2 middle, 3 right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(u32),
}

impl From<u32> for PointerButton {
    fn from(button: u32) -> Self {
        match button {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            other => Self::Other(other),
        }
    }
}

/// Cursor the host should display over the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
}

impl CursorStyle {
    /// CSS cursor name understood by GTK and browsers.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging {
        button: PointerButton,
        anchor: PixelPoint,
    },
}

/// Live box-select preview handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionOverlay {
    pub anchor: PixelPoint,
    pub current: PixelPoint,
}

impl SelectionOverlay {
    #[must_use]
    pub fn rect(self) -> PixelRect {
        PixelRect::spanning(self.anchor, self.current)
    }
}

/// What the engine must do in response to a drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    None,
    Pan { dx: f64, dy: f64 },
    Select(SelectionOverlay),
}

/// Pointer state machine: `Idle` or `Dragging(button, anchor)`.
///
/// The state is purely descriptive; viewport mutations are applied by the
/// engine from the returned effects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor: CursorStyle,
    selection: Option<SelectionOverlay>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> CursorStyle {
        self.cursor
    }

    #[must_use]
    pub fn selection(self) -> Option<SelectionOverlay> {
        self.selection
    }

    pub fn on_press(&mut self, button: PointerButton, point: PixelPoint) {
        self.mode = InteractionMode::Dragging {
            button,
            anchor: point,
        };
        self.selection = None;
    }

    /// Left drags pan incrementally (the anchor follows the pointer); right
    /// drags only refresh the selection preview.
    pub fn on_drag(&mut self, point: PixelPoint) -> DragEffect {
        match self.mode {
            InteractionMode::Dragging {
                button: PointerButton::Left,
                anchor,
            } => {
                self.mode = InteractionMode::Dragging {
                    button: PointerButton::Left,
                    anchor: point,
                };
                self.cursor = CursorStyle::Grab;
                DragEffect::Pan {
                    dx: point.x - anchor.x,
                    dy: point.y - anchor.y,
                }
            }
            InteractionMode::Dragging {
                button: PointerButton::Right,
                anchor,
            } => {
                let overlay = SelectionOverlay {
                    anchor,
                    current: point,
                };
                self.selection = Some(overlay);
                DragEffect::Select(overlay)
            }
            InteractionMode::Dragging { .. } | InteractionMode::Idle => DragEffect::None,
        }
    }

    /// Ends any drag and returns the box to zoom into for right-button releases.
    pub fn on_release(&mut self, button: PointerButton, point: PixelPoint) -> Option<SelectionOverlay> {
        let anchor = match self.mode {
            InteractionMode::Dragging { anchor, .. } => Some(anchor),
            InteractionMode::Idle => None,
        };
        self.mode = InteractionMode::Idle;
        self.selection = None;
        self.cursor = CursorStyle::Default;

        if button != PointerButton::Right {
            return None;
        }
        anchor.map(|anchor| SelectionOverlay {
            anchor,
            current: point,
        })
    }
}

/// Zoom delta for a click: left zooms in, right zooms out.
#[must_use]
pub fn click_zoom_delta(button: PointerButton, zoom_step: f64) -> Option<f64> {
    match button {
        PointerButton::Left => Some(zoom_step),
        PointerButton::Right => Some(-zoom_step),
        PointerButton::Middle | PointerButton::Other(_) => None,
    }
}

/// Zoom delta for a wheel rotation: rotating away from the user zooms in.
#[must_use]
pub fn wheel_zoom_delta(rotation: f64, zoom_step: f64) -> Option<f64> {
    if rotation < 0.0 {
        Some(zoom_step)
    } else if rotation > 0.0 {
        Some(-zoom_step)
    } else {
        None
    }
}
