use serde::{Deserialize, Serialize};

use crate::core::{DataWindow, SampledCurve, TickPlan, WidgetSize, plan_ticks, sample_functions};
use crate::interaction::{CursorStyle, SelectionOverlay};
use crate::render::Renderer;

use super::GrapherEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrapherSnapshot {
    pub widget_size: WidgetSize,
    pub window: DataWindow,
    pub plot_width: i32,
    pub plot_height: i32,
    pub margin: i32,
    pub function_names: Vec<String>,
    pub cursor: CursorStyle,
    pub selection: Option<SelectionOverlay>,
    /// `None` when the plot area is empty.
    pub ticks: Option<TickPlan>,
    pub curves: Vec<SampledCurve>,
}

impl<R: Renderer> GrapherEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> GrapherSnapshot {
        let viewport = self.viewport;
        let renderable = viewport.is_renderable();
        GrapherSnapshot {
            widget_size: self.widget_size,
            window: viewport.window(),
            plot_width: viewport.plot_width(),
            plot_height: viewport.plot_height(),
            margin: viewport.margin(),
            function_names: self.functions.names(),
            cursor: self.interaction.cursor(),
            selection: self.interaction.selection(),
            ticks: renderable.then(|| plan_ticks(viewport)),
            curves: sample_functions(viewport, self.sample_step_px, &self.functions),
        }
    }
}
