use std::path::PathBuf;

use duoslider_engine::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid slider configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("view size must be positive and finite, got {width}x{height}")]
    InvalidView { width: f64, height: f64 },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl HarnessError {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 2,
            Self::Json(_) | Self::InvalidView { .. } => 3,
            Self::Config(_) => 4,
            Self::Output(_) => 5,
        }
    }
}
