//! Investment parameter record and compounding frequency

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// How often interest is calculated and added to the balance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundFrequency {
    Daily,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl CompoundFrequency {
    /// All frequencies, most frequent first
    pub const ALL: [CompoundFrequency; 4] = [
        CompoundFrequency::Daily,
        CompoundFrequency::Monthly,
        CompoundFrequency::Quarterly,
        CompoundFrequency::Annually,
    ];

    /// Compounding periods per year (m)
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundFrequency::Daily => 365,
            CompoundFrequency::Monthly => 12,
            CompoundFrequency::Quarterly => 4,
            CompoundFrequency::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundFrequency::Daily => "daily",
            CompoundFrequency::Monthly => "monthly",
            CompoundFrequency::Quarterly => "quarterly",
            CompoundFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for CompoundFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompoundFrequency {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(CompoundFrequency::Daily),
            "monthly" => Ok(CompoundFrequency::Monthly),
            "quarterly" => Ok(CompoundFrequency::Quarterly),
            "annually" => Ok(CompoundFrequency::Annually),
            _ => Err(GrowthError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Input fields of the calculator, used to name missing or invalid values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    InitialInvestment,
    MonthlyContribution,
    AnnualInterestRate,
    Years,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::InitialInvestment => "initial investment",
            Field::MonthlyContribution => "monthly contribution",
            Field::AnnualInterestRate => "annual interest rate",
            Field::Years => "years",
        };
        f.write_str(name)
    }
}

/// Validated inputs for one projection
///
/// Only the readiness gate builds these from user text. Tests and batch
/// callers may construct one directly, in which case they own the
/// invariants (non-negative amounts, positive rate and years).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParameters {
    /// Lump sum deposited at the start
    pub initial_investment: f64,

    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Nominal annual rate in percentage points (7.2 means 7.2%)
    pub annual_interest_rate: f64,

    /// Whole years to project
    pub years: u32,

    pub compound_frequency: CompoundFrequency,
}

impl InvestmentParameters {
    pub fn new(
        initial_investment: f64,
        monthly_contribution: f64,
        annual_interest_rate: f64,
        years: u32,
        compound_frequency: CompoundFrequency,
    ) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            annual_interest_rate,
            years,
            compound_frequency,
        }
    }

    /// Annual rate as a fraction (r)
    pub fn annual_rate(&self) -> f64 {
        self.annual_interest_rate / 100.0
    }

    /// Same record with a different compounding frequency
    pub fn with_frequency(&self, compound_frequency: CompoundFrequency) -> Self {
        Self {
            compound_frequency,
            ..*self
        }
    }
}
