use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::function::{Function, FunctionSet};
use crate::core::types::PixelVertex;
use crate::core::viewport::Viewport;

/// Horizontal pixel distance between consecutive samples.
pub const SAMPLE_STEP_PX: u32 = 5;

/// Sample abscissas shared by every function in one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    pub xs: Vec<f64>,
    pub pixels: Vec<i32>,
}

impl SampleGrid {
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Pixel polyline for one function, split wherever evaluation failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub name: String,
    pub segments: SmallVec<[Vec<PixelVertex>; 1]>,
    pub gap_count: usize,
}

impl SampledCurve {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Builds `floor(W / step) + 1` evenly spaced samples starting at `xmin`.
///
/// Non-renderable viewports and a zero step yield an empty grid.
#[must_use]
pub fn sample_grid(viewport: Viewport, step_px: u32) -> SampleGrid {
    if !viewport.is_renderable() || step_px == 0 {
        return SampleGrid {
            xs: Vec::new(),
            pixels: Vec::new(),
        };
    }

    let count = viewport.plot_width().unsigned_abs() / step_px + 1;
    let dx = viewport.dx(f64::from(step_px));
    let xmin = viewport.window().xmin;

    let xs: Vec<f64> = (0..count).map(|i| xmin + f64::from(i) * dx).collect();
    let pixels = xs.iter().map(|&x| viewport.x_to_pixel(x)).collect();
    SampleGrid { xs, pixels }
}

/// Evaluates `function` on `grid` and converts results to pixel vertices.
#[must_use]
pub fn sample_function(
    grid: &SampleGrid,
    viewport: Viewport,
    function: &dyn Function,
) -> SampledCurve {
    let mut segments: SmallVec<[Vec<PixelVertex>; 1]> = SmallVec::new();
    let mut current = Vec::with_capacity(grid.len());
    let mut gap_count = 0;

    for (&x, &pixel_x) in grid.xs.iter().zip(&grid.pixels) {
        match function.evaluate(x) {
            Ok(y) if y.is_finite() => {
                current.push(PixelVertex::new(pixel_x, viewport.y_to_pixel(y)));
            }
            _ => {
                gap_count += 1;
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    SampledCurve {
        name: function.name().to_owned(),
        segments,
        gap_count,
    }
}

/// Samples every function in registration order on one shared grid.
#[must_use]
pub fn sample_functions(
    viewport: Viewport,
    step_px: u32,
    functions: &FunctionSet,
) -> Vec<SampledCurve> {
    let grid = sample_grid(viewport, step_px);
    let curves: Vec<SampledCurve> = functions
        .iter()
        .map(|function| sample_function(&grid, viewport, function))
        .collect();
    trace!(
        samples = grid.len(),
        functions = curves.len(),
        gaps = curves.iter().map(|curve| curve.gap_count).sum::<usize>(),
        "sampled functions"
    );
    curves
}
