//! Forecast module containing the FRRA payment-date engine

pub mod frra;

pub use frra::*;
