//! Identifier for boleto instances
//!
//! A `BoletoId` never reaches the barcode. It exists so log events emitted
//! while a boleto computes its fields can be correlated.

use std::fmt;

use uuid::Uuid;

/// Time-ordered identifier of a single boleto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoletoId(Uuid);

impl BoletoId {
    /// Creates a new UUIDv7 identifier, ordered by creation time
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for BoletoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BOL-{}", self.0)
    }
}
