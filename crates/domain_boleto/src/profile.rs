//! Bank profile contract
//!
//! Every issuing bank encodes the Nosso Numero and the barcode free field its
//! own way. The rule sets are disjoint, so each bank is a standalone
//! implementation of [`BankProfile`] rather than a refinement of another.

use std::fmt;

use crate::error::BoletoError;
use crate::params::BoletoParams;
use crate::species::DocumentSpecies;

/// Width of the barcode free field (positions 20 to 44)
pub const FREE_FIELD_LENGTH: usize = 25;

/// Capability contract shared by all bank profiles
///
/// Generators are pure: they read the params and never cache. Memoisation of
/// the free field belongs to the [`Boleto`](crate::boleto::Boleto) entity.
pub trait BankProfile: fmt::Debug + Send + Sync {
    /// FEBRABAN bank code, e.g. `"001"`
    fn bank_code(&self) -> &'static str;

    /// Human-readable bank name
    fn bank_name(&self) -> &'static str;

    /// Wallet codes the bank offers
    fn wallets(&self) -> &'static [&'static str];

    /// Returns true if the bank offers the wallet
    fn accepts_wallet(&self, wallet: &str) -> bool {
        self.wallets().contains(&wallet)
    }

    /// Two-digit remittance code of a document species, if the bank accepts it
    fn species_code(&self, species: DocumentSpecies) -> Option<&'static str>;

    /// Checks that the fields every generator needs are present
    fn is_valid(&self, params: &BoletoParams) -> bool;

    /// Derives the Nosso Numero
    fn nosso_numero(&self, params: &BoletoParams) -> Result<String, BoletoError>;

    /// Formats a Nosso Numero for printing on the slip
    fn display_nosso_numero(&self, nosso_numero: &str) -> Result<String, BoletoError>;

    /// Derives the 25-digit barcode free field
    fn free_field(&self, params: &BoletoParams) -> Result<String, BoletoError>;
}
