pub mod function;
pub mod function_factory;
pub mod sampler;
pub mod ticks;
pub mod types;
pub mod viewport;

pub use function::{FnFunction, Function, FunctionSet};
pub use function_factory::{BuiltinFunctionFactory, FunctionFactory};
pub use sampler::{
    SAMPLE_STEP_PX, SampleGrid, SampledCurve, sample_function, sample_functions, sample_grid,
};
pub use ticks::{
    AxisTicks, Tick, TickAxis, TickPlan, format_tick_label, nice_unit, plan_ticks,
    stepped_tick_values,
};
pub use types::{PixelPoint, PixelRect, PixelVertex, WidgetSize};
pub use viewport::{DataWindow, MARGIN_PX, Viewport, ZOOM_RATE};
