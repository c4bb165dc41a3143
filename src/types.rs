//! Core types and data structures for the integration

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Build a reference date from its calendar parts.
///
/// Non-constructible dates (e.g. February 30th) are rejected here, before
/// they reach the forecast engine.
pub fn reference_date(year: i32, month: u32, day: u32) -> IntegrationResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        IntegrationError::InvalidDate(format!("{year:04}-{month:02}-{day:02}"))
    })
}

/// A transaction as received from the accounting platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingTransaction {
    /// Identifier assigned by the accounting platform
    pub id: String,
    /// Date when the transaction occurred
    pub date: NaiveDate,
    /// Free-text description, possibly carrying "Label: value" lines
    pub description: String,
    /// Optional reference number (invoice number, NFSe, etc.)
    pub reference: Option<String>,
    /// Structured fields recovered from the description
    pub metadata: HashMap<String, String>,
    /// When the record was created
    pub created_at: NaiveDateTime,
    /// When the record was last updated
    pub updated_at: NaiveDateTime,
}

impl AccountingTransaction {
    /// Create a new transaction record
    pub fn new(id: String, date: NaiveDate, description: String, reference: Option<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            date,
            description,
            reference,
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the record before it is handed to report generation
    pub fn validate(&self) -> IntegrationResult<()> {
        if self.id.trim().is_empty() {
            return Err(IntegrationError::Validation(
                "Transaction ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// A forecast together with the anchor it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrraForecast {
    /// Date the forecast was computed for ("today")
    pub reference_date: NaiveDate,
    /// December 1st anchor selected for the reference date
    pub base_date: NaiveDate,
    /// Business days added on top of the anchor
    pub grace_business_days: u32,
    /// Forecast payment date
    pub payment_date: NaiveDate,
}

/// Errors raised at the boundary of the integration
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for integration operations
pub type IntegrationResult<T> = Result<T, IntegrationError>;
