//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam solver operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Beam length must be positive and finite, got {0}")]
    InvalidLength(f64),

    #[error("Mesh requires at least 2 nodes, got {0}")]
    InvalidMeshDensity(usize),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam solver operations
pub type BeamResult<T> = Result<T, BeamError>;
