//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating Banco do Brasil params that
//! satisfy the preconditions of each layout.

use domain_boleto::BoletoParams;
use proptest::prelude::*;

/// Wallets Banco do Brasil offers
pub const BB_WALLETS: [&str; 8] = ["11", "12", "15", "16", "17", "18", "31", "51"];

/// Strategy for generating a numeric string of exactly `len` digits
pub fn digits_strategy(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Strategy for generating a numeric string of 1 to `max_len` digits
pub fn document_strategy(max_len: usize) -> impl Strategy<Value = String> {
    (1..=max_len).prop_flat_map(digits_strategy)
}

/// Strategy for generating wallet codes Banco do Brasil offers
pub fn wallet_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(BB_WALLETS.to_vec()).prop_map(str::to_string)
}

/// Strategy for generating agreement lengths with a defined layout
pub fn agreement_len_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(4usize), Just(6usize), Just(7usize)]
}

/// Strategy for generating agreement lengths without a layout
pub fn invalid_agreement_len_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![1usize..4, Just(5usize), 8usize..12]
}

/// Maximum document length accepted for an agreement length
pub fn max_document_len(agreement_len: usize) -> usize {
    match agreement_len {
        4 => 7,
        6 => 5,
        _ => 10,
    }
}

/// Strategy for generating params every standard layout accepts
///
/// Wallet variation is never 17, so the no-registration layout is excluded.
pub fn standard_params_strategy() -> impl Strategy<Value = BoletoParams> {
    agreement_len_strategy().prop_flat_map(|agreement_len| {
        (
            digits_strategy(agreement_len),
            document_strategy(max_document_len(agreement_len)),
            wallet_strategy(),
            proptest::option::of(0u32..17),
            document_strategy(4),
            document_strategy(8),
        )
            .prop_map(|(agreement, document, wallet, variation, agency, account)| BoletoParams {
                document_number: document,
                agreement_code: agreement,
                wallet_code: wallet,
                wallet_variation: variation,
                agency_code: agency,
                account_code: account,
            })
    })
}

/// Strategy for generating no-registration params with any document length
pub fn no_registration_params_strategy() -> impl Strategy<Value = BoletoParams> {
    (
        digits_strategy(6),
        document_strategy(17),
        prop_oneof![Just("16".to_string()), Just("18".to_string())],
    )
        .prop_map(|(agreement, document, wallet)| {
            BoletoParams::new()
                .with_agreement_code(agreement)
                .with_document_number(document)
                .with_wallet_code(wallet)
                .with_wallet_variation(17)
                .with_agency_code("1606")
                .with_account_code("128963")
        })
}
