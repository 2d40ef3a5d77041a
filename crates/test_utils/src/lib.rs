//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! boleto test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built params for each Banco do Brasil layout
//! - `builders`: Builder for boletos with sensible defaults
//! - `assertions`: Custom assertion helpers for generated fields
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
