//! # Coop Accounting Core
//!
//! Business rules shared by the cooperative's payroll system and its
//! accounting platform integration.
//!
//! ## Features
//!
//! - **FRRA forecasting**: payment date of the annual reserve fund, anchored
//!   on December 1st plus a grace period in business days
//! - **Description fields**: recovery of `NFSe` and `Transação do mês`
//!   values embedded in transaction descriptions
//! - **Configuration**: JSON-backed grace period settings
//!
//! ## Quick Start
//!
//! ```rust
//! use coop_accounting_core::{DateForecastEngine, TransactionFieldExtractor};
//! use chrono::NaiveDate;
//!
//! let engine = DateForecastEngine::new();
//! let today = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
//! assert_eq!(
//!     engine.forecast(today, 5),
//!     NaiveDate::from_ymd_opt(2023, 12, 8).unwrap()
//! );
//!
//! let fields = TransactionFieldExtractor::new().extract("NFSe: 4521");
//! assert_eq!(fields.get("nfse"), Some("4521"));
//! ```

pub mod config;
pub mod extraction;
pub mod forecast;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::*;
pub use extraction::*;
pub use forecast::*;
pub use traits::*;
pub use types::*;
