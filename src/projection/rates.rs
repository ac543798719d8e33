//! Periodic and effective monthly rates for a parameter record

use crate::params::InvestmentParameters;

/// Rates derived once per projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRates {
    /// Compounding periods per year (m)
    pub periods_per_year: u32,

    /// Nominal rate applied each compounding period (r/m)
    pub periodic_rate: f64,

    /// Monthly rate with the same compounding power as the periodic rate
    /// applied m times a year: (1 + r/m)^(m/12) - 1
    pub effective_monthly_rate: f64,
}

impl GrowthRates {
    pub fn for_parameters(params: &InvestmentParameters) -> Self {
        Self::new(params.annual_rate(), params.compound_frequency.periods_per_year())
    }

    /// `annual_rate` is a fraction (0.072 for 7.2%)
    pub fn new(annual_rate: f64, periods_per_year: u32) -> Self {
        let m = periods_per_year as f64;
        let periodic_rate = annual_rate / m;
        // m/12 is fractional for daily (365/12) and quarterly (1/3) compounding
        let effective_monthly_rate = (1.0 + periodic_rate).powf(m / 12.0) - 1.0;

        Self {
            periods_per_year,
            periodic_rate,
            effective_monthly_rate,
        }
    }

    /// Growth factor of a lump sum after `years` whole years
    pub fn principal_growth(&self, years: u32) -> f64 {
        let periods = years as f64 * self.periods_per_year as f64;
        (1.0 + self.periodic_rate).powf(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_monthly_effective_rate_equals_periodic_rate() {
        let rates = GrowthRates::new(0.072, 12);
        assert_relative_eq!(rates.periodic_rate, 0.006, epsilon = 1e-15);
        assert_relative_eq!(rates.effective_monthly_rate, 0.006, epsilon = 1e-15);
    }

    #[test]
    fn test_effective_rate_compounds_to_same_annual_growth() {
        for m in [365, 12, 4, 1] {
            let rates = GrowthRates::new(0.08, m);
            let via_months = (1.0 + rates.effective_monthly_rate).powi(12);
            assert_relative_eq!(via_months, rates.principal_growth(1), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quarterly_rates() {
        let rates = GrowthRates::new(0.12, 4);
        assert_relative_eq!(rates.periodic_rate, 0.03, epsilon = 1e-15);
        assert_relative_eq!(rates.effective_monthly_rate, 1.03_f64.cbrt() - 1.0, epsilon = 1e-12);
        assert_relative_eq!(rates.principal_growth(1), 1.03_f64.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_has_zero_effective_rate() {
        for m in [365, 12, 4, 1] {
            let rates = GrowthRates::new(0.0, m);
            assert_abs_diff_eq!(rates.effective_monthly_rate, 0.0);
            assert_abs_diff_eq!(rates.principal_growth(30), 1.0);
        }
    }
}
