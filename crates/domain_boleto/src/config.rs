//! Beneficiary configuration
//!
//! Hosts usually issue every boleto from the same agency, account, agreement
//! and wallet. [`BeneficiaryConfig`] loads those from `BOLETO_*` environment
//! variables so only the document number varies per slip.

use std::collections::HashMap;

use serde::Deserialize;

use crate::params::BoletoParams;

/// Beneficiary account data shared by all boletos of a host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BeneficiaryConfig {
    /// Agency code (`BOLETO_AGENCY`)
    pub agency: String,
    /// Account code (`BOLETO_ACCOUNT`)
    pub account: String,
    /// Agreement code (`BOLETO_AGREEMENT`)
    pub agreement: String,
    /// Wallet code (`BOLETO_WALLET`)
    pub wallet: String,
    /// Wallet variation (`BOLETO_WALLET_VARIATION`)
    #[serde(default)]
    pub wallet_variation: Option<u32>,
}

impl BeneficiaryConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("BOLETO"))
    }

    /// Loads configuration from an explicit set of `BOLETO_*` variables
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("BOLETO").source(Some(vars)))
    }

    fn load(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source.try_parsing(false))
            .build()?
            .try_deserialize()
    }

    /// Builds the params of one boleto
    pub fn params_for(&self, document_number: impl Into<String>) -> BoletoParams {
        BoletoParams {
            document_number: document_number.into(),
            agreement_code: self.agreement.clone(),
            wallet_code: self.wallet.clone(),
            wallet_variation: self.wallet_variation,
            agency_code: self.agency.clone(),
            account_code: self.account.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_vars_keeps_leading_zeros() {
        let config = BeneficiaryConfig::from_vars(vars(&[
            ("BOLETO_AGENCY", "0016"),
            ("BOLETO_ACCOUNT", "00128963"),
            ("BOLETO_AGREEMENT", "012345"),
            ("BOLETO_WALLET", "18"),
        ]))
        .unwrap();

        assert_eq!(config.agency, "0016");
        assert_eq!(config.agreement, "012345");
        assert_eq!(config.wallet_variation, None);
    }

    #[test]
    fn test_wallet_variation_from_text() {
        let config = BeneficiaryConfig::from_vars(vars(&[
            ("BOLETO_AGENCY", "1606"),
            ("BOLETO_ACCOUNT", "128963"),
            ("BOLETO_AGREEMENT", "123456"),
            ("BOLETO_WALLET", "16"),
            ("BOLETO_WALLET_VARIATION", "17"),
        ]))
        .unwrap();

        assert_eq!(config.wallet_variation, Some(17));
    }

    #[test]
    fn test_missing_required_variable() {
        let result = BeneficiaryConfig::from_vars(vars(&[("BOLETO_AGENCY", "1606")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_params_for() {
        let config = BeneficiaryConfig {
            agency: "1606".to_string(),
            account: "128963".to_string(),
            agreement: "123456".to_string(),
            wallet: "16".to_string(),
            wallet_variation: Some(17),
        };

        let params = config.params_for("42");
        assert_eq!(params.document_number, "42");
        assert_eq!(params.agreement_code, "123456");
        assert_eq!(params.wallet_variation, Some(17));
        assert_eq!(params.account_code, "128963");
    }
}
