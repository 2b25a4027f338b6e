use thiserror::Error;

pub type GrapherResult<T> = Result<T, GrapherError>;

#[derive(Debug, Error)]
pub enum GrapherError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: i32, height: i32 },

    #[error("degenerate viewport: x=[{xmin}, {xmax}], y=[{ymin}, {ymax}]")]
    DegenerateViewport {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    #[error("function evaluation failed at x={x}: {reason}")]
    Evaluation { x: f64, reason: String },

    #[error("unknown expression: `{0}`")]
    UnknownExpression(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
