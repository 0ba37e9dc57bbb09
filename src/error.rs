use std::io;
use thiserror::Error;

/// Crate-specific error enum.
///
/// Looking up an id outside the table is not an error; [crate::lookup] returns `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper around `std::io::Error`.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wrapper around `csv::Error`.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper around `serde_json::Error`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The layout configuration can't produce a panel.
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// The value doesn't fit an i16 once scaled.
    #[error("{value} scaled by {scale} does not fit a 16-bit fixed-point value")]
    FixedPointOverflow {
        /// The physical value.
        value: f64,
        /// The scale factor.
        scale: f64,
    },

    /// The scale factor isn't a positive finite number.
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScale(f64),

    /// The viewer window failed.
    #[error("viewer error: {0}")]
    Viewer(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
