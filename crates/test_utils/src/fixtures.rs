//! Pre-built Test Fixtures
//!
//! Provides ready-to-use params covering every Banco do Brasil layout.
//! Expected values are worked out by hand in the doc comment of each fixture.

use domain_boleto::BoletoParams;

/// Default beneficiary agency
pub const AGENCY: &str = "1606";

/// Default beneficiary account
pub const ACCOUNT: &str = "128963";

/// Fixture for Banco do Brasil params
pub struct ParamsFixtures;

impl ParamsFixtures {
    /// 4-digit agreement, wallet 17
    ///
    /// Nosso Numero `12340000056`, printed `12340000056-9`,
    /// free field `1234000005616060012896317`.
    pub fn agreement_4() -> BoletoParams {
        BoletoParams::new()
            .with_agreement_code("1234")
            .with_document_number("56")
            .with_wallet_code("17")
            .with_agency_code(AGENCY)
            .with_account_code(ACCOUNT)
    }

    /// 6-digit agreement, wallet 18
    ///
    /// Nosso Numero `12345600078`, printed `12345600078-5`,
    /// free field `1234560007816060012896318`.
    pub fn agreement_6() -> BoletoParams {
        BoletoParams::new()
            .with_agreement_code("123456")
            .with_document_number("78")
            .with_wallet_code("18")
            .with_agency_code(AGENCY)
            .with_account_code(ACCOUNT)
    }

    /// 7-digit agreement, wallet 31
    ///
    /// Nosso Numero `76543210000000099`, free field `0000007654321000000009931`.
    pub fn agreement_7() -> BoletoParams {
        BoletoParams::new()
            .with_agreement_code("7654321")
            .with_document_number("99")
            .with_wallet_code("31")
            .with_agency_code("1234")
            .with_account_code("12345678")
    }

    /// 6-digit agreement, wallet 16, variation 17, 11-digit document
    ///
    /// Nosso Numero `00000078901234567`,
    /// free field `1234560000007890123456721`.
    pub fn no_registration() -> BoletoParams {
        BoletoParams::new()
            .with_agreement_code("123456")
            .with_document_number("78901234567")
            .with_wallet_code("16")
            .with_wallet_variation(17)
            .with_agency_code(AGENCY)
            .with_account_code(ACCOUNT)
    }
}
