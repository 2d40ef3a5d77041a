//! Test Data Builders
//!
//! Provides a builder for boletos that starts from the 4-digit agreement
//! fixture, so tests only spell out the fields they care about.

use std::sync::Arc;

use domain_boleto::{BancoDoBrasil, BankProfile, Boleto, BoletoParams, DocumentSpecies};

use crate::fixtures::ParamsFixtures;

/// Builder for constructing test boletos
pub struct TestBoletoBuilder {
    profile: Arc<dyn BankProfile>,
    params: BoletoParams,
    species: DocumentSpecies,
}

impl Default for TestBoletoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoletoBuilder {
    /// Creates a new Banco do Brasil builder with default values
    pub fn new() -> Self {
        Self {
            profile: Arc::new(BancoDoBrasil),
            params: ParamsFixtures::agreement_4(),
            species: DocumentSpecies::default(),
        }
    }

    /// Replaces all params
    pub fn with_params(mut self, params: BoletoParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the document number
    pub fn with_document_number(mut self, value: impl Into<String>) -> Self {
        self.params.document_number = value.into();
        self
    }

    /// Sets the agreement code
    pub fn with_agreement_code(mut self, value: impl Into<String>) -> Self {
        self.params.agreement_code = value.into();
        self
    }

    /// Sets the wallet code
    pub fn with_wallet_code(mut self, value: impl Into<String>) -> Self {
        self.params.wallet_code = value.into();
        self
    }

    /// Sets the wallet variation
    pub fn with_wallet_variation(mut self, value: Option<u32>) -> Self {
        self.params.wallet_variation = value;
        self
    }

    /// Sets the document species
    pub fn with_species(mut self, species: DocumentSpecies) -> Self {
        self.species = species;
        self
    }

    /// Builds the boleto
    pub fn build(self) -> Boleto {
        Boleto::new(self.profile, self.params).with_species(self.species)
    }
}
