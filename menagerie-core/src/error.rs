//! Error types for Menagerie.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`MenagerieError`] - Top-level error type for all Menagerie operations
//! - [`EmitError`] - Errors while delivering a sound to an output stream
//!
//! Producing a sound never fails: [`Voice::sound`] is infallible by
//! contract. Errors exist only at the delivery boundary, where the output
//! stream may refuse the write.
//!
//! [`Voice::sound`]: crate::Voice::sound

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Menagerie operations.
#[derive(Error, Debug)]
pub enum MenagerieError {
    /// An error occurred while emitting a sound.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while delivering a sound to an output stream.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The output stream refused the write.
    #[error("failed to write sound to output stream")]
    Io(#[from] std::io::Error),
}

// Convenience conversions
impl From<BoxError> for MenagerieError {
    fn from(err: BoxError) -> Self {
        MenagerieError::Custom(err)
    }
}
