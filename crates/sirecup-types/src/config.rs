//! Configuration for the settlement engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, SirecupError, constants};

/// Numeric knobs for a settlement run.
///
/// The defaults reproduce the established behavior (one-cent tolerance,
/// two decimal places); changing them changes which transactions are
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Amounts at or below this are treated as residue: not emitted, and
    /// a party whose remainder drops below it is considered settled.
    pub epsilon: Decimal,
    /// Decimal places for emitted transaction amounts.
    pub currency_scale: u32,
    /// Tolerance for the zero-sum balance check.
    pub zero_sum_tolerance: Decimal,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            epsilon: constants::SETTLEMENT_EPSILON,
            currency_scale: constants::CURRENCY_SCALE,
            zero_sum_tolerance: constants::ZERO_SUM_TOLERANCE,
        }
    }
}

impl SettlementConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`SirecupError::Serialization`] for malformed JSON and
    /// [`SirecupError::Configuration`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`SirecupError::Configuration`] if the epsilon is not positive,
    /// the tolerance is negative, or the scale exceeds what `Decimal` holds.
    pub fn validate(&self) -> Result<()> {
        // A zero epsilon would stop the sweep from ever advancing.
        if self.epsilon <= Decimal::ZERO {
            return Err(SirecupError::Configuration(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.zero_sum_tolerance < Decimal::ZERO {
            return Err(SirecupError::Configuration(format!(
                "zero_sum_tolerance must not be negative, got {}",
                self.zero_sum_tolerance
            )));
        }
        if self.currency_scale > constants::MAX_DECIMAL_SCALE {
            return Err(SirecupError::Configuration(format!(
                "currency_scale must be at most {}, got {}",
                constants::MAX_DECIMAL_SCALE,
                self.currency_scale
            )));
        }
        Ok(())
    }
}
