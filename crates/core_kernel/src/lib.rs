//! Core Kernel - Foundational building blocks for bank-slip generation
//!
//! This crate provides the bank-agnostic pieces every bank profile composes
//! its field layouts from:
//! - Fixed-width zero padding for numeric fields
//! - Weighted modulo-11 check digits
//! - Typed identifiers for correlating boletos

pub mod numeric;
pub mod checksum;
pub mod identifiers;
pub mod error;

pub use numeric::{zero_pad, only_digits, NumericError};
pub use checksum::{modulo11, ChecksumError};
pub use identifiers::BoletoId;
pub use error::CoreError;
