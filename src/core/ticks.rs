use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::viewport::Viewport;

/// Target number of tick intervals across the visible span.
pub const TICK_DIVISIONS: f64 = 10.0;

/// Upper bound on stepped ticks emitted per axis.
pub const MAX_TICKS_PER_AXIS: usize = 64;

// rust_decimal cannot represent more fractional digits than this.
const MAX_LABEL_FRACTION_DIGITS: u32 = 28;

// Largest tick index that is still an exact integer in f64.
const MAX_EXACT_MULTIPLE: f64 = 9_007_199_254_740_992.0;
const MULTIPLE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickAxis {
    X,
    Y,
}

/// One graduation mark: data value, pixel position on its axis and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub axis: TickAxis,
    pub value: f64,
    pub pixel: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub step: f64,
    /// Tick at data value 0, drawn solid to anchor the axes.
    pub origin: Option<Tick>,
    /// Ticks at non-zero multiples of `step`, ascending.
    pub stepped: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub x: AxisTicks,
    pub y: AxisTicks,
}

/// Snaps `width` up to the next "nice" value of the form `{2, 5, 10} × 10^k`.
///
/// Returns `width` unchanged when it is not a finite positive number.
#[must_use]
pub fn nice_unit(width: f64) -> f64 {
    if !width.is_finite() || width <= 0.0 {
        return width;
    }

    let scale = 10f64.powf(width.log10().floor());
    let normalized = width / scale;
    let snapped = if normalized < 2.0 {
        2.0
    } else if normalized < 5.0 {
        5.0
    } else {
        10.0
    };
    snapped * scale
}

/// Non-zero multiples of `step` strictly inside `(min, max)`, ascending.
#[must_use]
pub fn stepped_tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if !min.is_finite() || !max.is_finite() || max <= min {
        return values;
    }
    if !step.is_finite() || step <= 0.0 {
        return values;
    }

    let mut k = (min / step).floor();
    for _ in 0..MAX_TICKS_PER_AXIS * 2 {
        let value = k * step;
        if value >= max || values.len() >= MAX_TICKS_PER_AXIS {
            break;
        }
        if k != 0.0 && value > min {
            values.push(value);
        }
        let next = k + 1.0;
        if next == k {
            break;
        }
        k = next;
    }
    values
}

/// Formats a tick value with as many fractional digits as `step` needs.
///
/// Values that are whole multiples of `step` are rebuilt as `k × step` in
/// decimal, so large magnitudes keep their exact digits.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    match step_multiple_decimal(value, step).or_else(|| Decimal::from_f64(value)) {
        Some(mut decimal) => {
            decimal.rescale(label_fraction_digits(step));
            decimal.to_string()
        }
        None => format!("{value}"),
    }
}

fn step_multiple_decimal(value: f64, step: f64) -> Option<Decimal> {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return None;
    }
    let multiple = (value / step).round();
    if multiple.abs() > MAX_EXACT_MULTIPLE {
        return None;
    }
    if (value - multiple * step).abs() > step * MULTIPLE_TOLERANCE {
        return None;
    }
    Decimal::from(multiple as i64).checked_mul(Decimal::from_f64(step)?)
}

fn label_fraction_digits(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent).min(f64::from(MAX_LABEL_FRACTION_DIGITS)) as u32
    }
}

/// Computes tick spacing and tick positions for both axes of `viewport`.
#[must_use]
pub fn plan_ticks(viewport: Viewport) -> TickPlan {
    let window = viewport.window();
    TickPlan {
        x: plan_axis(TickAxis::X, window.xmin, window.xmax, |value| {
            viewport.x_to_pixel(value)
        }),
        y: plan_axis(TickAxis::Y, window.ymin, window.ymax, |value| {
            viewport.y_to_pixel(value)
        }),
    }
}

fn plan_axis(axis: TickAxis, min: f64, max: f64, to_pixel: impl Fn(f64) -> i32) -> AxisTicks {
    let step = nice_unit((max - min) / TICK_DIVISIONS);
    let make_tick = |value: f64| Tick {
        axis,
        value,
        pixel: to_pixel(value),
        label: format_tick_label(value, step),
    };

    let origin = (min < 0.0 && 0.0 < max).then(|| make_tick(0.0));
    let stepped = stepped_tick_values(min, max, step)
        .into_iter()
        .map(make_tick)
        .collect();

    AxisTicks {
        step,
        origin,
        stepped,
    }
}
