//! Calculator configuration
//!
//! Values come from defaults, optionally overridden by environment variables:
//!   GROWTH_MAX_YEARS, GROWTH_DEFAULT_FREQUENCY

use std::env;

use log::warn;

use crate::params::CompoundFrequency;

/// Longest horizon the readiness gate accepts
pub const DEFAULT_MAX_YEARS: u32 = 500;

pub const MAX_YEARS_VAR: &str = "GROWTH_MAX_YEARS";
pub const DEFAULT_FREQUENCY_VAR: &str = "GROWTH_DEFAULT_FREQUENCY";

/// Settings shared by the readiness gate and the front ends
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// Upper bound on the projection horizon in years
    pub max_years: u32,

    /// Frequency preselected on a fresh form
    pub default_frequency: CompoundFrequency,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_years: DEFAULT_MAX_YEARS,
            default_frequency: CompoundFrequency::Monthly,
        }
    }
}

impl GateConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_YEARS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(years) if years > 0 => config.max_years = years,
                _ => warn!("ignoring {}={:?}: expected a positive integer", MAX_YEARS_VAR, raw),
            }
        }

        if let Some(raw) = lookup(DEFAULT_FREQUENCY_VAR) {
            match raw.parse::<CompoundFrequency>() {
                Ok(freq) => config.default_frequency = freq,
                Err(e) => warn!("ignoring {}: {}", DEFAULT_FREQUENCY_VAR, e),
            }
        }

        config
    }
}
