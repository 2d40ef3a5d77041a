//! Bank profiles

pub mod banco_do_brasil;

pub use banco_do_brasil::BancoDoBrasil;
