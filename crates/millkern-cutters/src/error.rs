//! Error types for cutter construction and capability dispatch.

use thiserror::Error;

/// Errors reported by the cutter layer.
///
/// Degenerate *geometry* never lands here: sweep tests report no-contact
/// instead. Errors are reserved for invalid construction parameters and
/// capability requests a shape cannot serve.
#[derive(Error, Debug)]
pub enum CutterError {
    /// Construction parameters describe an impossible tool.
    #[error("invalid cutter shape: {0}")]
    InvalidShape(String),

    /// The requested capability is not available for this shape or engine.
    #[error("unsupported capability: {0}")]
    Unsupported(String),
}

/// Result type for cutter operations.
pub type Result<T> = std::result::Result<T, CutterError>;
