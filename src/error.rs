use thiserror::Error;

pub type CanvasResult<T> = Result<T, CanvasError>;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurfaceSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("backend failure: {0}")]
    Backend(String),
}
