//! Extraction module for structured fields in transaction descriptions

pub mod extractor;
pub mod fields;

pub use extractor::*;
pub use fields::*;
