use thiserror::Error;

/// All errors produced by podsift-core.
#[derive(Debug, Error)]
pub enum PodsiftError {
    #[error("input too short: no complete aggregation window fits ({frames} frames at {sample_rate} Hz)")]
    InsufficientData { frames: u64, sample_rate: u32 },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PodsiftError>;
