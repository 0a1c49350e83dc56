use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid scale geometry: width={width}, height={height}, padding={padding}")]
    InvalidGeometry {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid config json: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("surface backend error: {0}")]
    Backend(String),
}
