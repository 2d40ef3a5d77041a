//! Boleto entity
//!
//! A [`Boleto`] ties the slip's input fields to the bank profile that knows
//! how to encode them. It gates every generator behind validation and keeps
//! the barcode free field as a snapshot: the first successful computation is
//! cached and returned on every later read, even if fields change afterwards.

use std::sync::{Arc, Mutex, PoisonError};

use core_kernel::{only_digits, BoletoId};
use tracing::debug;

use crate::error::BoletoError;
use crate::params::BoletoParams;
use crate::profile::BankProfile;
use crate::species::DocumentSpecies;

/// Lifecycle of the cached free field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeFieldState {
    /// Not computed yet, or every attempt so far failed
    Pending,
    /// Computed once; terminal
    Computed(String),
}

/// A bank slip issued against a specific bank profile
#[derive(Debug)]
pub struct Boleto {
    id: BoletoId,
    profile: Arc<dyn BankProfile>,
    params: BoletoParams,
    species: DocumentSpecies,
    free_field: Mutex<FreeFieldState>,
}

impl Boleto {
    /// Creates a boleto for the given bank profile
    pub fn new(profile: Arc<dyn BankProfile>, params: BoletoParams) -> Self {
        Self {
            id: BoletoId::new_v7(),
            profile,
            params,
            species: DocumentSpecies::default(),
            free_field: Mutex::new(FreeFieldState::Pending),
        }
    }

    /// Sets the document species
    pub fn with_species(mut self, species: DocumentSpecies) -> Self {
        self.species = species;
        self
    }

    pub fn id(&self) -> BoletoId {
        self.id
    }

    pub fn profile(&self) -> &dyn BankProfile {
        self.profile.as_ref()
    }

    pub fn params(&self) -> &BoletoParams {
        &self.params
    }

    pub fn species(&self) -> DocumentSpecies {
        self.species
    }

    /// Remittance code of the document species for this bank
    pub fn species_code(&self) -> Option<&'static str> {
        self.profile.species_code(self.species)
    }

    pub fn set_document_number(&mut self, value: impl Into<String>) {
        self.params.document_number = value.into();
    }

    pub fn set_agreement_code(&mut self, value: impl Into<String>) {
        self.params.agreement_code = value.into();
    }

    pub fn set_wallet_code(&mut self, value: impl Into<String>) {
        self.params.wallet_code = value.into();
    }

    /// Sets the wallet variation from its textual form
    ///
    /// Leading zeros are accepted (`"017"` is variation 17); an empty value
    /// clears the variation.
    pub fn set_wallet_variation(&mut self, value: &str) -> Result<(), BoletoError> {
        let value = value.trim();
        if value.is_empty() {
            self.params.wallet_variation = None;
            return Ok(());
        }

        let variation = value
            .parse::<u32>()
            .map_err(|_| BoletoError::InvalidWalletVariation(value.to_string()))?;
        self.params.wallet_variation = Some(variation);
        Ok(())
    }

    /// Sets the agency code, dropping punctuation such as a check-digit dash
    pub fn set_agency_code(&mut self, value: &str) {
        self.params.agency_code = only_digits(value);
    }

    /// Sets the account code, dropping punctuation such as a check-digit dash
    pub fn set_account_code(&mut self, value: &str) {
        self.params.account_code = only_digits(value);
    }

    /// Returns true if the required fields are present
    pub fn is_valid(&self) -> bool {
        self.profile.is_valid(&self.params)
    }

    /// Checks required fields, then that the bank offers the wallet
    pub fn validate(&self) -> Result<(), BoletoError> {
        if !self.is_valid() {
            return Err(BoletoError::missing(self.params.missing_fields()));
        }

        if !self.profile.accepts_wallet(&self.params.wallet_code) {
            return Err(BoletoError::UnsupportedWallet {
                wallet: self.params.wallet_code.clone(),
                bank: self.profile.bank_code(),
            });
        }

        Ok(())
    }

    /// The bank's tracking number for this slip
    pub fn nosso_numero(&self) -> Result<String, BoletoError> {
        self.validate()?;
        self.profile.nosso_numero(&self.params)
    }

    /// The tracking number as printed on the slip
    pub fn nosso_numero_display(&self) -> Result<String, BoletoError> {
        let nosso_numero = self.nosso_numero()?;
        self.profile.display_nosso_numero(&nosso_numero)
    }

    /// The 25-digit barcode free field
    ///
    /// Computed on first success and cached for the lifetime of the boleto.
    /// Concurrent first calls are serialised, so all of them observe the same
    /// value. Failures are not cached.
    pub fn free_field(&self) -> Result<String, BoletoError> {
        let mut state = self
            .free_field
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let FreeFieldState::Computed(value) = &*state {
            return Ok(value.clone());
        }

        self.validate()?;
        let value = self.profile.free_field(&self.params)?;
        debug!(
            boleto_id = %self.id,
            bank = self.profile.bank_code(),
            "free field computed"
        );

        *state = FreeFieldState::Computed(value.clone());
        Ok(value)
    }

    /// Current state of the free-field cache
    pub fn free_field_state(&self) -> FreeFieldState {
        self.free_field
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::BancoDoBrasil;

    fn boleto() -> Boleto {
        let params = BoletoParams::new()
            .with_agreement_code("1234")
            .with_document_number("56")
            .with_wallet_code("17")
            .with_agency_code("1606")
            .with_account_code("128963");
        Boleto::new(Arc::new(BancoDoBrasil), params)
    }

    #[test]
    fn test_free_field_state_transitions_once() {
        let boleto = boleto();
        assert_eq!(boleto.free_field_state(), FreeFieldState::Pending);

        let value = boleto.free_field().unwrap();
        assert_eq!(boleto.free_field_state(), FreeFieldState::Computed(value));
    }

    #[test]
    fn test_failure_is_not_cached() {
        let mut boleto = boleto();
        boleto.set_agreement_code("12345");
        assert!(boleto.free_field().is_err());
        assert_eq!(boleto.free_field_state(), FreeFieldState::Pending);

        boleto.set_agreement_code("1234");
        assert!(boleto.free_field().is_ok());
    }

    #[test]
    fn test_wallet_variation_parsing() {
        let mut boleto = boleto();
        boleto.set_wallet_variation("017").unwrap();
        assert_eq!(boleto.params().wallet_variation, Some(17));

        boleto.set_wallet_variation("").unwrap();
        assert_eq!(boleto.params().wallet_variation, None);

        assert_eq!(
            boleto.set_wallet_variation("x7"),
            Err(BoletoError::InvalidWalletVariation("x7".to_string()))
        );
    }

    #[test]
    fn test_agency_and_account_drop_punctuation() {
        let mut boleto = boleto();
        boleto.set_agency_code("1606-3");
        boleto.set_account_code("12.896-3");
        assert_eq!(boleto.params().agency_code, "16063");
        assert_eq!(boleto.params().account_code, "128963");
    }
}
