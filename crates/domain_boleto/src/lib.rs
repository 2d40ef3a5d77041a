//! Boleto Domain - Bank-Specific Field Encoding
//!
//! This crate derives the bank-specific fields of a Brazilian bank slip
//! (boleto): the issuing bank's tracking number ("Nosso Numero") and the
//! 25-digit free field embedded in the barcode and digitable line.
//!
//! # Bank Profiles
//!
//! Each bank is a [`BankProfile`] with its own, self-contained rule set:
//! - **Validation**: required fields are present
//! - **Nosso Numero**: layout selected by agreement length and wallet
//! - **Display**: Nosso Numero with its printed check digit
//! - **Free field**: Nosso Numero composed with agency, account and wallet
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_boleto::{BancoDoBrasil, Boleto, BoletoParams};
//!
//! let params = BoletoParams::new()
//!     .with_agreement_code("1234")
//!     .with_document_number("56")
//!     .with_wallet_code("17")
//!     .with_agency_code("1606")
//!     .with_account_code("128963");
//!
//! let boleto = Boleto::new(Arc::new(BancoDoBrasil), params);
//!
//! assert_eq!(boleto.nosso_numero_display().unwrap(), "12340000056-9");
//! assert_eq!(boleto.free_field().unwrap(), "1234000005616060012896317");
//! ```

pub mod banks;
pub mod boleto;
pub mod config;
pub mod error;
pub mod params;
pub mod profile;
pub mod rules;
pub mod species;

pub use banks::BancoDoBrasil;
pub use boleto::{Boleto, FreeFieldState};
pub use config::BeneficiaryConfig;
pub use error::BoletoError;
pub use params::BoletoParams;
pub use profile::{BankProfile, FREE_FIELD_LENGTH};
pub use rules::LayoutRule;
pub use species::DocumentSpecies;
