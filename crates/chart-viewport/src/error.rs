// File: crates/chart-viewport/src/error.rs
// Summary: Configuration error type. The numeric core itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse computator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max zoom must be finite and positive, got {0}")]
    InvalidMaxZoom(f32),
    #[error("{name} viewport has a non-finite edge: {viewport:?}")]
    InvalidViewport {
        name: &'static str,
        viewport: crate::Viewport,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
