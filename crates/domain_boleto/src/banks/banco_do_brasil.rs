//! Banco do Brasil (001)
//!
//! # Nosso Numero
//!
//! The agreement ("convenio") length selects the layout:
//!
//! | Agreement | Condition                       | Nosso Numero                     |
//! |-----------|---------------------------------|----------------------------------|
//! | 4 digits  | any                             | agreement(4) + document(7)       |
//! | 6 digits  | wallet 16/18 with variation 17  | document(17)                     |
//! | 6 digits  | otherwise                       | agreement(6) + document(5)       |
//! | 7 digits  | any                             | agreement(7) + document(10)      |
//!
//! Eleven-digit numbers are printed with a modulo-11 check digit; seventeen
//! digit numbers are printed as is.
//!
//! # Free field
//!
//! | Layout           | Composition                                            |
//! |------------------|--------------------------------------------------------|
//! | no registration  | agreement(6) + Nosso Numero(17) + `21`                 |
//! | 4 or 6 digits    | Nosso Numero(11) + agency(4) + account(8) + wallet(2)  |
//! | 7 digits         | `000000` + Nosso Numero(17) + wallet(2)                |
//!
//! The no-registration layout always carries wallet marker `21`, whatever the
//! actual wallet (16 or 18) is.

use core_kernel::{modulo11, zero_pad, NumericError};

use crate::error::BoletoError;
use crate::params::BoletoParams;
use crate::profile::{BankProfile, FREE_FIELD_LENGTH};
use crate::rules::{self, LayoutRule};
use crate::species::{lookup_code, DocumentSpecies, SpeciesCodeTable};

const BANK_CODE: &str = "001";

const WALLETS: &[&str] = &["11", "12", "15", "16", "17", "18", "31", "51"];

const NO_REGISTRATION_WALLETS: &[&str] = &["16", "18"];
const NO_REGISTRATION_VARIATION: u32 = 17;
const NO_REGISTRATION_MARKER: &str = "21";

/// Longest document number the standard layouts accept
const MAX_STANDARD_DOCUMENT_LEN: usize = 10;

/// Nosso Numero length at and above which no check digit is printed
const UNCHECKED_NOSSO_NUMERO_LEN: usize = 17;

const SPECIES_CODES: SpeciesCodeTable = &[
    (DocumentSpecies::MerchantInvoice, "01"),
    (DocumentSpecies::PromissoryNote, "02"),
    (DocumentSpecies::InsuranceNote, "03"),
    (DocumentSpecies::Receipt, "05"),
    (DocumentSpecies::BillOfExchange, "08"),
    (DocumentSpecies::Warrant, "09"),
    (DocumentSpecies::Cheque, "10"),
    (DocumentSpecies::ServiceInvoice, "12"),
    (DocumentSpecies::DebitNote, "13"),
];

const NOSSO_NUMERO_RULES: &[LayoutRule] = &[
    LayoutRule {
        name: "agreement_4",
        applies: has_agreement_4,
        layout: agreement_4_nosso_numero,
    },
    LayoutRule {
        name: "no_registration",
        applies: is_no_registration,
        layout: no_registration_nosso_numero,
    },
    LayoutRule {
        name: "agreement_6",
        applies: has_agreement_6,
        layout: agreement_6_nosso_numero,
    },
    LayoutRule {
        name: "agreement_7",
        applies: has_agreement_7,
        layout: agreement_7_nosso_numero,
    },
];

const FREE_FIELD_RULES: &[LayoutRule] = &[
    LayoutRule {
        name: "unsupported_agreement",
        applies: has_unsupported_agreement,
        layout: reject_agreement,
    },
    LayoutRule {
        name: "no_registration",
        applies: is_no_registration,
        layout: no_registration_free_field,
    },
    LayoutRule {
        name: "oversized_document",
        applies: has_oversized_document,
        layout: reject_document,
    },
    LayoutRule {
        name: "agency_account",
        applies: has_agreement_4_or_6,
        layout: agency_account_free_field,
    },
    LayoutRule {
        name: "zero_prefixed",
        applies: has_agreement_7,
        layout: zero_prefixed_free_field,
    },
];

/// Banco do Brasil bank profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BancoDoBrasil;

impl BancoDoBrasil {
    pub fn new() -> Self {
        Self
    }
}

impl BankProfile for BancoDoBrasil {
    fn bank_code(&self) -> &'static str {
        BANK_CODE
    }

    fn bank_name(&self) -> &'static str {
        "Banco do Brasil"
    }

    fn wallets(&self) -> &'static [&'static str] {
        WALLETS
    }

    fn species_code(&self, species: DocumentSpecies) -> Option<&'static str> {
        lookup_code(SPECIES_CODES, species)
    }

    fn is_valid(&self, params: &BoletoParams) -> bool {
        params.missing_fields().is_empty()
    }

    fn nosso_numero(&self, params: &BoletoParams) -> Result<String, BoletoError> {
        rules::evaluate("nosso_numero", NOSSO_NUMERO_RULES, params)
            .unwrap_or_else(|| Err(invalid_agreement(params)))
    }

    fn display_nosso_numero(&self, nosso_numero: &str) -> Result<String, BoletoError> {
        if nosso_numero.len() >= UNCHECKED_NOSSO_NUMERO_LEN {
            return Ok(nosso_numero.to_string());
        }

        let check_digit = modulo11(nosso_numero)?;
        Ok(format!("{}-{}", nosso_numero, check_digit))
    }

    fn free_field(&self, params: &BoletoParams) -> Result<String, BoletoError> {
        let free_field = rules::evaluate("free_field", FREE_FIELD_RULES, params)
            .unwrap_or_else(|| Err(invalid_agreement(params)))?;

        debug_assert_eq!(free_field.len(), FREE_FIELD_LENGTH);
        Ok(free_field)
    }
}

fn invalid_agreement(params: &BoletoParams) -> BoletoError {
    BoletoError::InvalidAgreementLength {
        length: params.agreement_len(),
    }
}

// Guards

fn has_agreement_4(params: &BoletoParams) -> bool {
    params.agreement_len() == 4
}

fn has_agreement_6(params: &BoletoParams) -> bool {
    params.agreement_len() == 6
}

fn has_agreement_7(params: &BoletoParams) -> bool {
    params.agreement_len() == 7
}

fn has_agreement_4_or_6(params: &BoletoParams) -> bool {
    has_agreement_4(params) || has_agreement_6(params)
}

fn has_unsupported_agreement(params: &BoletoParams) -> bool {
    !(has_agreement_4_or_6(params) || has_agreement_7(params))
}

/// Six-digit agreement on a no-registration wallet with variation 17
fn is_no_registration(params: &BoletoParams) -> bool {
    has_agreement_6(params)
        && NO_REGISTRATION_WALLETS.contains(&params.wallet_code.as_str())
        && params.wallet_variation == Some(NO_REGISTRATION_VARIATION)
}

fn has_oversized_document(params: &BoletoParams) -> bool {
    params.document_len() > MAX_STANDARD_DOCUMENT_LEN
}

// Field helpers

/// Pads the document number; a number wider than its slot is a capacity error
fn document(params: &BoletoParams, width: usize) -> Result<String, BoletoError> {
    zero_pad(&params.document_number, width).map_err(|e| match e {
        NumericError::Overflow { .. } => BoletoError::InvalidNossoNumeroLength,
        other => other.into(),
    })
}

fn agreement(params: &BoletoParams, width: usize) -> Result<String, BoletoError> {
    Ok(zero_pad(&params.agreement_code, width)?)
}

fn wallet(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(zero_pad(&params.wallet_code, 2)?)
}

// Nosso Numero layouts

fn agreement_4_nosso_numero(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(agreement(params, 4)? + &document(params, 7)?)
}

fn no_registration_nosso_numero(params: &BoletoParams) -> Result<String, BoletoError> {
    document(params, 17)
}

fn agreement_6_nosso_numero(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(agreement(params, 6)? + &document(params, 5)?)
}

fn agreement_7_nosso_numero(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(agreement(params, 7)? + &document(params, 10)?)
}

fn nosso_numero(params: &BoletoParams) -> Result<String, BoletoError> {
    BancoDoBrasil.nosso_numero(params)
}

// Free field layouts

fn reject_agreement(params: &BoletoParams) -> Result<String, BoletoError> {
    Err(invalid_agreement(params))
}

fn reject_document(_: &BoletoParams) -> Result<String, BoletoError> {
    Err(BoletoError::InvalidNossoNumeroLength)
}

fn no_registration_free_field(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(agreement(params, 6)? + &nosso_numero(params)? + NO_REGISTRATION_MARKER)
}

fn agency_account_free_field(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok(nosso_numero(params)?
        + &zero_pad(&params.agency_code, 4)?
        + &zero_pad(&params.account_code, 8)?
        + &wallet(params)?)
}

fn zero_prefixed_free_field(params: &BoletoParams) -> Result<String, BoletoError> {
    Ok("000000".to_string() + &nosso_numero(params)? + &wallet(params)?)
}
