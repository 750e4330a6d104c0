//! Packing configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the container loading heuristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Fraction of a box's footprint that must rest on the floor or on the
    /// top faces of boxes directly below it (0.0 exclusive - 1.0).
    pub support_ratio: f64,

    /// Check candidate points on the rayon pool. The first admissible point
    /// in candidate order still wins.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            support_ratio: 1.0,
            parallel: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required support ratio. Values above 1 are clamped to 1.
    pub fn with_support_ratio(mut self, ratio: f64) -> Self {
        self.support_ratio = if ratio.is_nan() {
            ratio
        } else {
            ratio.min(1.0)
        };
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.support_ratio.is_finite() || self.support_ratio <= 0.0 {
            return Err(Error::ConfigError(format!(
                "support ratio must be in (0, 1], got {}",
                self.support_ratio
            )));
        }
        Ok(())
    }
}
