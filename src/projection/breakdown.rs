//! Yearly breakdown rows and the summary derived from them

use serde::{Deserialize, Serialize};

/// Projected position at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdownEntry {
    /// 1-based year index
    pub year: u32,

    /// Principal put in so far: initial deposit plus all monthly contributions
    pub total_contributions: f64,

    /// Account value at year end
    pub future_value: f64,

    pub interest_earned: f64,
}

impl YearlyBreakdownEntry {
    pub fn new(year: u32, total_contributions: f64, future_value: f64) -> Self {
        Self {
            year,
            total_contributions,
            future_value,
            interest_earned: future_value - total_contributions,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Value at the end of the final year
    pub future_value: f64,

    /// Contributions through the final year
    pub total_contributions: f64,

    pub total_interest: f64,

    /// One entry per year, in order
    pub yearly_breakdown: Vec<YearlyBreakdownEntry>,
}

impl ProjectionResult {
    /// Build the summary from the last row; no rows gives all zeros
    pub fn from_breakdown(yearly_breakdown: Vec<YearlyBreakdownEntry>) -> Self {
        let (future_value, total_contributions) = yearly_breakdown
            .last()
            .map(|e| (e.future_value, e.total_contributions))
            .unwrap_or((0.0, 0.0));

        Self {
            future_value,
            total_contributions,
            total_interest: future_value - total_contributions,
            yearly_breakdown,
        }
    }

    pub fn years(&self) -> usize {
        self.yearly_breakdown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yearly_breakdown.is_empty()
    }

    /// Row for a 1-based year
    pub fn entry(&self, year: u32) -> Option<&YearlyBreakdownEntry> {
        let idx = (year as usize).checked_sub(1)?;
        self.yearly_breakdown.get(idx)
    }

    pub fn final_entry(&self) -> Option<&YearlyBreakdownEntry> {
        self.yearly_breakdown.last()
    }
}
