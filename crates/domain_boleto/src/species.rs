//! Document species
//!
//! The species ("especie do documento") tells the bank what kind of credit
//! instrument backs the boleto. Remittance files carry it as a two-digit code
//! whose numbering differs from bank to bank, so each profile owns its table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoletoError;

/// Kind of credit instrument behind a boleto
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentSpecies {
    /// Duplicata mercantil
    #[default]
    #[serde(rename = "DM")]
    MerchantInvoice,
    /// Nota promissoria
    #[serde(rename = "NP")]
    PromissoryNote,
    /// Nota de seguro
    #[serde(rename = "NS")]
    InsuranceNote,
    /// Recibo
    #[serde(rename = "REC")]
    Receipt,
    /// Letra de cambio
    #[serde(rename = "LC")]
    BillOfExchange,
    /// Warrant
    #[serde(rename = "W")]
    Warrant,
    /// Cheque
    #[serde(rename = "CH")]
    Cheque,
    /// Duplicata de servico
    #[serde(rename = "DS")]
    ServiceInvoice,
    /// Nota de debito
    #[serde(rename = "ND")]
    DebitNote,
    /// Duplicata rural
    #[serde(rename = "DR")]
    RuralInvoice,
    /// Outros
    #[serde(rename = "OU")]
    Other,
}

impl DocumentSpecies {
    /// All species, in declaration order
    pub const ALL: [DocumentSpecies; 11] = [
        DocumentSpecies::MerchantInvoice,
        DocumentSpecies::PromissoryNote,
        DocumentSpecies::InsuranceNote,
        DocumentSpecies::Receipt,
        DocumentSpecies::BillOfExchange,
        DocumentSpecies::Warrant,
        DocumentSpecies::Cheque,
        DocumentSpecies::ServiceInvoice,
        DocumentSpecies::DebitNote,
        DocumentSpecies::RuralInvoice,
        DocumentSpecies::Other,
    ];

    /// Returns the abbreviation printed on the slip
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DocumentSpecies::MerchantInvoice => "DM",
            DocumentSpecies::PromissoryNote => "NP",
            DocumentSpecies::InsuranceNote => "NS",
            DocumentSpecies::Receipt => "REC",
            DocumentSpecies::BillOfExchange => "LC",
            DocumentSpecies::Warrant => "W",
            DocumentSpecies::Cheque => "CH",
            DocumentSpecies::ServiceInvoice => "DS",
            DocumentSpecies::DebitNote => "ND",
            DocumentSpecies::RuralInvoice => "DR",
            DocumentSpecies::Other => "OU",
        }
    }
}

impl fmt::Display for DocumentSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for DocumentSpecies {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        DocumentSpecies::ALL
            .into_iter()
            .find(|species| species.abbreviation() == wanted)
            .ok_or_else(|| {
                BoletoError::Core(core_kernel::CoreError::validation(format!(
                    "Unknown document species: {}",
                    s
                )))
            })
    }
}

/// Two-digit remittance code of each species a bank accepts
pub type SpeciesCodeTable = &'static [(DocumentSpecies, &'static str)];

/// Looks up a species in a bank's code table
pub fn lookup_code(table: SpeciesCodeTable, species: DocumentSpecies) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == species)
        .map(|(_, code)| *code)
}
