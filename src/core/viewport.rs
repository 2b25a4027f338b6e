use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::{PixelPoint, PixelRect, WidgetSize};
use crate::error::{GrapherError, GrapherResult};

/// Pixel border kept between the widget edge and the plot rectangle.
pub const MARGIN_PX: i32 = 40;

/// Exponent applied per zoom unit: `scale = exp(dz * ZOOM_RATE)`.
pub const ZOOM_RATE: f64 = 0.01;

/// Visible rectangle in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataWindow {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl DataWindow {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> GrapherResult<Self> {
        let window = Self {
            xmin,
            xmax,
            ymin,
            ymax,
        };
        window.validate()?;
        Ok(window)
    }

    /// Rejects empty, inverted or non-finite windows.
    pub fn validate(self) -> GrapherResult<()> {
        let finite = self.xmin.is_finite()
            && self.xmax.is_finite()
            && self.ymin.is_finite()
            && self.ymax.is_finite();
        if !finite || self.xmax <= self.xmin || self.ymax <= self.ymin {
            return Err(GrapherError::DegenerateViewport {
                xmin: self.xmin,
                xmax: self.xmax,
                ymin: self.ymin,
                ymax: self.ymax,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.ymax - self.ymin
    }
}

impl Default for DataWindow {
    fn default() -> Self {
        Self {
            xmin: -FRAC_PI_2,
            xmax: 3.0 * PI / 2.0,
            ymin: -1.5,
            ymax: 1.5,
        }
    }
}

/// Data window plus the pixel geometry it is mapped onto.
///
/// The value is `Copy`: render passes work on a snapshot while the engine
/// keeps the authoritative instance. Mapping functions are pure; mutating
/// operations either commit a valid window or leave the previous one intact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportFields")]
pub struct Viewport {
    window: DataWindow,
    plot_width: i32,
    plot_height: i32,
    margin: i32,
}

impl Viewport {
    /// Creates a viewport for a widget of `widget` size surrounded by `margin`.
    pub fn new(window: DataWindow, widget: WidgetSize, margin: i32) -> GrapherResult<Self> {
        validate_margin(margin)?;
        window.validate()?;
        let mut viewport = Self {
            window,
            plot_width: 0,
            plot_height: 0,
            margin,
        };
        viewport.resize(widget);
        Ok(viewport)
    }

    /// Creates a viewport from explicit plot-area extents.
    pub fn with_plot_size(
        window: DataWindow,
        plot_width: i32,
        plot_height: i32,
        margin: i32,
    ) -> GrapherResult<Self> {
        validate_margin(margin)?;
        window.validate()?;
        Ok(Self {
            window,
            plot_width,
            plot_height,
            margin,
        })
    }

    /// Recomputes the plot area from the widget size; the window is unchanged.
    pub fn resize(&mut self, widget: WidgetSize) {
        self.plot_width = inner_extent(widget.width, self.margin);
        self.plot_height = inner_extent(widget.height, self.margin);
    }

    #[must_use]
    pub fn window(self) -> DataWindow {
        self.window
    }

    #[must_use]
    pub fn plot_width(self) -> i32 {
        self.plot_width
    }

    #[must_use]
    pub fn plot_height(self) -> i32 {
        self.plot_height
    }

    #[must_use]
    pub fn margin(self) -> i32 {
        self.margin
    }

    #[must_use]
    pub fn is_renderable(self) -> bool {
        self.plot_width > 0 && self.plot_height > 0
    }

    /// Plot rectangle in widget pixel space.
    #[must_use]
    pub fn plot_rect(self) -> PixelRect {
        PixelRect::new(
            f64::from(self.margin),
            f64::from(self.margin),
            f64::from(self.plot_width),
            f64::from(self.plot_height),
        )
    }

    /// Forward x transform, rounded to the nearest pixel.
    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> i32 {
        let normalized = (x - self.window.xmin) / self.window.x_span();
        round_half_up(normalized * f64::from(self.plot_width)).saturating_add(self.margin)
    }

    /// Forward y transform; data-up is pixel-up.
    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> i32 {
        let normalized = (y - self.window.ymin) / self.window.y_span();
        self.plot_height
            .saturating_sub(round_half_up(normalized * f64::from(self.plot_height)))
            .saturating_add(self.margin)
    }

    /// Data-space width covered by `pixel_delta` horizontal pixels.
    #[must_use]
    pub fn dx(self, pixel_delta: f64) -> f64 {
        self.window.x_span() * pixel_delta / f64::from(self.plot_width)
    }

    /// Data-space height covered by `pixel_delta` vertical pixels (sign inverted).
    #[must_use]
    pub fn dy(self, pixel_delta: f64) -> f64 {
        -(self.window.y_span() * pixel_delta / f64::from(self.plot_height))
    }

    #[must_use]
    pub fn pixel_to_x(self, pixel: f64) -> f64 {
        self.window.xmin + self.dx(pixel - f64::from(self.margin))
    }

    #[must_use]
    pub fn pixel_to_y(self, pixel: f64) -> f64 {
        self.window.ymin + self.dy((pixel - f64::from(self.margin)) - f64::from(self.plot_height))
    }

    /// Maps a pointer position into data space as `(x, y)`.
    #[must_use]
    pub fn pixel_to_data(self, point: PixelPoint) -> (f64, f64) {
        (self.pixel_to_x(point.x), self.pixel_to_y(point.y))
    }

    /// Pans by a pixel delta; dragging right moves the window left.
    pub fn translate(&mut self, pixel_dx: f64, pixel_dy: f64) -> GrapherResult<()> {
        self.ensure_renderable()?;
        let dx = self.dx(pixel_dx);
        let dy = self.dy(pixel_dy);
        self.commit(DataWindow {
            xmin: self.window.xmin - dx,
            xmax: self.window.xmax - dx,
            ymin: self.window.ymin - dy,
            ymax: self.window.ymax - dy,
        })
    }

    /// Rescales both axes around the data point under `center`.
    ///
    /// Positive `dz` zooms in. Opposite deltas at the same pixel cancel out
    /// because `exp(a) * exp(-a) == 1`.
    pub fn zoom_at_point(&mut self, center: PixelPoint, dz: f64) -> GrapherResult<()> {
        self.ensure_renderable()?;
        if !center.is_finite() || !dz.is_finite() {
            return Err(GrapherError::InvalidData(
                "zoom center and delta must be finite".to_owned(),
            ));
        }

        let (x, y) = self.pixel_to_data(center);
        let scale = (dz * ZOOM_RATE).exp();
        self.commit(DataWindow {
            xmin: x + (self.window.xmin - x) / scale,
            xmax: x + (self.window.xmax - x) / scale,
            ymin: y + (self.window.ymin - y) / scale,
            ymax: y + (self.window.ymax - y) / scale,
        })
    }

    /// Sets the window to the data rectangle spanned by two pixel corners.
    pub fn zoom_to_box(&mut self, p0: PixelPoint, p1: PixelPoint) -> GrapherResult<()> {
        self.ensure_renderable()?;
        let (x0, y0) = self.pixel_to_data(p0);
        let (x1, y1) = self.pixel_to_data(p1);
        self.commit(DataWindow {
            xmin: x0.min(x1),
            xmax: x0.max(x1),
            ymin: y0.min(y1),
            ymax: y0.max(y1),
        })
    }

    /// Replaces the window after validation.
    pub fn set_window(&mut self, window: DataWindow) -> GrapherResult<()> {
        self.commit(window)
    }

    fn ensure_renderable(self) -> GrapherResult<()> {
        if self.is_renderable() {
            return Ok(());
        }
        Err(GrapherError::InvalidPlotArea {
            width: self.plot_width,
            height: self.plot_height,
        })
    }

    fn commit(&mut self, candidate: DataWindow) -> GrapherResult<()> {
        candidate.validate()?;
        trace!(
            xmin = candidate.xmin,
            xmax = candidate.xmax,
            ymin = candidate.ymin,
            ymax = candidate.ymax,
            "viewport window updated"
        );
        self.window = candidate;
        Ok(())
    }
}

/// Unvalidated wire form of [`Viewport`].
#[derive(Deserialize)]
struct ViewportFields {
    window: DataWindow,
    plot_width: i32,
    plot_height: i32,
    margin: i32,
}

impl TryFrom<ViewportFields> for Viewport {
    type Error = GrapherError;

    fn try_from(fields: ViewportFields) -> GrapherResult<Self> {
        Self::with_plot_size(
            fields.window,
            fields.plot_width,
            fields.plot_height,
            fields.margin,
        )
    }
}

fn validate_margin(margin: i32) -> GrapherResult<()> {
    if margin < 0 {
        return Err(GrapherError::InvalidData(format!(
            "margin must be >= 0, got {margin}"
        )));
    }
    Ok(())
}

fn inner_extent(outer: u32, margin: i32) -> i32 {
    let extent = i64::from(outer) - 2 * i64::from(margin);
    extent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Rounds half-way values toward positive infinity, saturating at the `i32` range.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
