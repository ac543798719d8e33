//! "Ready to calculate" gate
//!
//! Turns normalized, possibly incomplete input into either a validated
//! `InvestmentParameters` or the full list of reasons it cannot be used yet.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::data::{CompoundFrequency, Field, InvestmentParameters};
use super::normalize::{normalize_amount, normalize_rate, normalize_years};
use crate::config::GateConfig;

/// Normalized input that has not been validated yet
///
/// `None` means the field was never entered or could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    pub initial_investment: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub annual_interest_rate: Option<f64>,
    pub years: Option<f64>,
    #[serde(default)]
    pub compound_frequency: CompoundFrequency,
}

impl RawParameters {
    /// Normalize the four text fields
    pub fn from_text(
        initial_investment: &str,
        monthly_contribution: &str,
        annual_interest_rate: &str,
        years: &str,
        compound_frequency: CompoundFrequency,
    ) -> Self {
        Self {
            initial_investment: normalize_amount(initial_investment),
            monthly_contribution: normalize_amount(monthly_contribution),
            annual_interest_rate: normalize_rate(annual_interest_rate),
            years: normalize_years(years),
            compound_frequency,
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::InitialInvestment => self.initial_investment,
            Field::MonthlyContribution => self.monthly_contribution,
            Field::AnnualInterestRate => self.annual_interest_rate,
            Field::Years => self.years,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::InitialInvestment => self.initial_investment = value,
            Field::MonthlyContribution => self.monthly_contribution = value,
            Field::AnnualInterestRate => self.annual_interest_rate = value,
            Field::Years => self.years = value,
        }
    }
}

/// Why a set of inputs cannot be projected yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum NotReadyReason {
    /// Field empty or not a number
    Missing { field: Field },
    /// Monetary field below zero
    Negative { field: Field },
    /// Rate of zero or below
    NonPositiveRate,
    NonPositiveYears,
    FractionalYears,
    TooManyYears { years: f64, max: u32 },
}

impl fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotReadyReason::Missing { field } => write!(f, "{} is missing", field),
            NotReadyReason::Negative { field } => write!(f, "{} must not be negative", field),
            NotReadyReason::NonPositiveRate => write!(f, "annual interest rate must be above zero"),
            NotReadyReason::NonPositiveYears => write!(f, "years must be above zero"),
            NotReadyReason::FractionalYears => write!(f, "years must be a whole number"),
            NotReadyReason::TooManyYears { years, max } => {
                write!(f, "{} years exceeds the limit of {}", years, max)
            }
        }
    }
}

/// Outcome of the readiness check
#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    Ready(InvestmentParameters),
    NotReady(Vec<NotReadyReason>),
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    /// Validated parameters, if ready
    pub fn parameters(&self) -> Option<&InvestmentParameters> {
        match self {
            Readiness::Ready(params) => Some(params),
            Readiness::NotReady(_) => None,
        }
    }

    /// Reasons blocking the calculation (empty when ready)
    pub fn reasons(&self) -> &[NotReadyReason] {
        match self {
            Readiness::Ready(_) => &[],
            Readiness::NotReady(reasons) => reasons,
        }
    }
}

/// Validate normalized input
///
/// All problems are collected. A rate of exactly zero is "not ready", not a
/// zero-growth scenario.
pub fn check_readiness(raw: &RawParameters, config: &GateConfig) -> Readiness {
    let mut reasons = Vec::new();

    let initial_investment = check_amount(raw, Field::InitialInvestment, &mut reasons);
    let monthly_contribution = check_amount(raw, Field::MonthlyContribution, &mut reasons);

    let annual_interest_rate = match raw.annual_interest_rate {
        None => {
            reasons.push(NotReadyReason::Missing { field: Field::AnnualInterestRate });
            None
        }
        Some(rate) if rate <= 0.0 => {
            reasons.push(NotReadyReason::NonPositiveRate);
            None
        }
        Some(rate) => Some(rate),
    };

    let years = match raw.years {
        None => {
            reasons.push(NotReadyReason::Missing { field: Field::Years });
            None
        }
        Some(y) if y <= 0.0 => {
            reasons.push(NotReadyReason::NonPositiveYears);
            None
        }
        Some(y) if y.fract() != 0.0 => {
            reasons.push(NotReadyReason::FractionalYears);
            None
        }
        Some(y) if y > config.max_years as f64 => {
            reasons.push(NotReadyReason::TooManyYears { years: y, max: config.max_years });
            None
        }
        Some(y) => Some(y as u32),
    };

    match (initial_investment, monthly_contribution, annual_interest_rate, years) {
        (Some(p), Some(pmt), Some(rate), Some(n)) if reasons.is_empty() => {
            Readiness::Ready(InvestmentParameters::new(p, pmt, rate, n, raw.compound_frequency))
        }
        _ => {
            debug!("input not ready: {:?}", reasons);
            Readiness::NotReady(reasons)
        }
    }
}

fn check_amount(raw: &RawParameters, field: Field, reasons: &mut Vec<NotReadyReason>) -> Option<f64> {
    match raw.get(field) {
        None => {
            reasons.push(NotReadyReason::Missing { field });
            None
        }
        Some(v) if v < 0.0 => {
            reasons.push(NotReadyReason::Negative { field });
            None
        }
        Some(v) => Some(v),
    }
}
