//! Boleto domain errors

use core_kernel::{ChecksumError, CoreError, NumericError};
use thiserror::Error;

/// Errors that can occur while generating boleto fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoletoError {
    /// One or more required fields are empty
    #[error("Validation error: missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// Agreement code does not have a length the bank defines a layout for
    #[error("Agreement code must have 4, 6 or 7 digits, got {length}")]
    InvalidAgreementLength { length: usize },

    /// Document sequence does not fit the selected layout
    #[error("document sequence exceeds capacity for this wallet/agreement combination")]
    InvalidNossoNumeroLength,

    /// Wallet code is not offered by the bank
    #[error("Wallet {wallet:?} is not offered by bank {bank}")]
    UnsupportedWallet { wallet: String, bank: &'static str },

    /// Wallet variation is not an integer
    #[error("Invalid wallet variation: {0:?}")]
    InvalidWalletVariation(String),

    /// Error raised by a kernel collaborator
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BoletoError {
    pub fn missing(fields: Vec<&'static str>) -> Self {
        BoletoError::Validation { missing: fields }
    }

    /// Returns true for errors caused by missing input the caller can supply
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BoletoError::Validation { .. } | BoletoError::InvalidWalletVariation(_))
    }
}

impl From<NumericError> for BoletoError {
    fn from(error: NumericError) -> Self {
        BoletoError::Core(CoreError::Numeric(error))
    }
}

impl From<ChecksumError> for BoletoError {
    fn from(error: ChecksumError) -> Self {
        BoletoError::Core(CoreError::Checksum(error))
    }
}
