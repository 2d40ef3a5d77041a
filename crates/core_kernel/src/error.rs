//! Core error types used across the system

use thiserror::Error;
use crate::checksum::ChecksumError;
use crate::numeric::NumericError;

/// Core error type for the kernel
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Numeric format error: {0}")]
    Numeric(#[from] NumericError),

    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
