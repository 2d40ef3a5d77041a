//! Input fields a bank profile reads from a boleto

use serde::{Deserialize, Serialize};

/// Account, agreement, and wallet data a bank profile derives fields from
///
/// All codes are kept as numeric strings: their digit count is significant
/// (a 6-digit agreement selects a different layout than a 7-digit one), so
/// they must never round-trip through an integer type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoletoParams {
    /// Sequence number of the document within the agreement
    pub document_number: String,
    /// Agreement ("convenio") code with the issuing bank
    pub agreement_code: String,
    /// Wallet ("carteira") code
    pub wallet_code: String,
    /// Wallet variation, when the bank assigned one
    pub wallet_variation: Option<u32>,
    /// Beneficiary agency code
    pub agency_code: String,
    /// Beneficiary account code
    pub account_code: String,
}

impl BoletoParams {
    /// Creates empty params
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_number(mut self, value: impl Into<String>) -> Self {
        self.document_number = value.into();
        self
    }

    pub fn with_agreement_code(mut self, value: impl Into<String>) -> Self {
        self.agreement_code = value.into();
        self
    }

    pub fn with_wallet_code(mut self, value: impl Into<String>) -> Self {
        self.wallet_code = value.into();
        self
    }

    pub fn with_wallet_variation(mut self, value: u32) -> Self {
        self.wallet_variation = Some(value);
        self
    }

    pub fn with_agency_code(mut self, value: impl Into<String>) -> Self {
        self.agency_code = value.into();
        self
    }

    pub fn with_account_code(mut self, value: impl Into<String>) -> Self {
        self.account_code = value.into();
        self
    }

    /// Number of digits in the agreement code
    pub fn agreement_len(&self) -> usize {
        self.agreement_code.len()
    }

    /// Number of digits in the document number
    pub fn document_len(&self) -> usize {
        self.document_number.len()
    }

    /// Names of the required fields that are blank
    ///
    /// A lone `"0"` counts as blank, the same as an empty string. Longer
    /// all-zero values such as `"00"` are kept as supplied.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("document_number", &self.document_number),
            ("agreement_code", &self.agreement_code),
            ("wallet_code", &self.wallet_code),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| name)
        .collect()
    }
}

fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}
