//! Integration configuration

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Largest grace period accepted from configuration
pub const MAX_GRACE_BUSINESS_DAYS: u32 = 60;

/// FRRA forecasting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrraConfig {
    /// Business days added to the December 1st anchor
    pub grace_business_days: u32,
}

impl Default for FrraConfig {
    fn default() -> Self {
        Self {
            grace_business_days: 5,
        }
    }
}

/// Top-level configuration for the integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    pub frra: FrraConfig,
}

impl IntegrationConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> IntegrationResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IntegrationError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configured values
    pub fn validate(&self) -> IntegrationResult<()> {
        if self.frra.grace_business_days > MAX_GRACE_BUSINESS_DAYS {
            return Err(IntegrationError::Configuration(format!(
                "FRRA grace period cannot exceed {} business days, got {}",
                MAX_GRACE_BUSINESS_DAYS, self.frra.grace_business_days
            )));
        }

        Ok(())
    }
}
