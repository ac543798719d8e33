//! Compound growth projection engine
//!
//! Pure and synchronous: the same parameters always produce the same
//! breakdown, and nothing outside the returned value is touched.

use log::{debug, trace};

use super::breakdown::{ProjectionResult, YearlyBreakdownEntry};
use super::rates::GrowthRates;
use crate::params::InvestmentParameters;

/// Contributions are made monthly whatever the compounding frequency
pub const MONTHS_PER_YEAR: u32 = 12;

/// Project the investment year by year
///
/// Produces exactly `params.years` rows indexed 1..=years. Zero years gives
/// an empty breakdown and a zero summary.
pub fn project(params: &InvestmentParameters) -> ProjectionResult {
    let rates = GrowthRates::for_parameters(params);
    debug!(
        "projecting {} years, {} compounding, periodic rate {:.8}, effective monthly rate {:.8}",
        params.years, params.compound_frequency, rates.periodic_rate, rates.effective_monthly_rate
    );

    let breakdown: Vec<YearlyBreakdownEntry> = (1..=params.years)
        .map(|year| project_year(params, &rates, year))
        .collect();

    let result = ProjectionResult::from_breakdown(breakdown);
    debug!(
        "projection done: future value {:.2}, contributions {:.2}, interest {:.2}",
        result.future_value, result.total_contributions, result.total_interest
    );
    result
}

/// Position at the end of a single year
pub fn project_year(params: &InvestmentParameters, rates: &GrowthRates, year: u32) -> YearlyBreakdownEntry {
    let months = year as f64 * MONTHS_PER_YEAR as f64;

    let total_contributions = params.initial_investment + params.monthly_contribution * months;
    let principal_value = future_value_of_principal(params.initial_investment, rates, year);
    let contribution_value = future_value_of_contributions(
        params.monthly_contribution,
        rates.effective_monthly_rate,
        months,
    );

    let entry = YearlyBreakdownEntry::new(year, total_contributions, principal_value + contribution_value);
    trace!("year {}: {:?}", year, entry);
    entry
}

/// Lump sum compounded at the periodic rate for `years * m` periods
pub fn future_value_of_principal(principal: f64, rates: &GrowthRates, years: u32) -> f64 {
    principal * rates.principal_growth(years)
}

/// Future value of an ordinary annuity of monthly payments
///
/// A zero monthly rate degenerates to plain accumulation.
pub fn future_value_of_contributions(contribution: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate > 0.0 {
        contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
    } else {
        contribution * months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CompoundFrequency;
    use approx::assert_relative_eq;

    fn scenario_params() -> InvestmentParameters {
        InvestmentParameters::new(100_000_000.0, 5_000_000.0, 7.2, 20, CompoundFrequency::Monthly)
    }

    #[test]
    fn test_scenario_breakdown() {
        let result = project(&scenario_params());

        assert_eq!(result.yearly_breakdown.len(), 20);
        let first = &result.yearly_breakdown[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.total_contributions, 160_000_000.0);
        assert!(first.future_value > first.total_contributions);
        assert!(first.interest_earned > 0.0);
    }

    #[test]
    fn test_scenario_first_year_value() {
        let result = project(&scenario_params());
        let growth = 1.006_f64.powi(12);
        let expected = 100_000_000.0 * growth + 5_000_000.0 * (growth - 1.0) / 0.006;
        assert_relative_eq!(result.yearly_breakdown[0].future_value, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_single_year_lump_sum() {
        let params = InvestmentParameters::new(100.0, 0.0, 12.0, 1, CompoundFrequency::Annually);
        let result = project(&params);

        assert_eq!(result.yearly_breakdown.len(), 1);
        assert_relative_eq!(result.future_value, 112.0, epsilon = 1e-9);
        assert_eq!(result.total_contributions, 100.0);
        assert_relative_eq!(result.total_interest, 12.0, epsilon = 1e-9);
        assert_relative_eq!(result.yearly_breakdown[0].interest_earned, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_annuity_only() {
        // 100 a month at 1% a month for 12 months
        let params = InvestmentParameters::new(0.0, 100.0, 12.0, 1, CompoundFrequency::Monthly);
        let result = project(&params);
        assert_relative_eq!(result.future_value, 1_268.250_301_319_7, epsilon = 1e-6);
        assert_eq!(result.total_contributions, 1_200.0);
    }

    #[test]
    fn test_zero_rate_degenerates_to_accumulation() {
        for freq in CompoundFrequency::ALL {
            let params = InvestmentParameters::new(1_000.0, 50.0, 0.0, 10, freq);
            let result = project(&params);
            for entry in &result.yearly_breakdown {
                let expected = 1_000.0 + 50.0 * entry.year as f64 * 12.0;
                assert_eq!(entry.future_value, expected, "{} year {}", freq, entry.year);
                assert_eq!(entry.interest_earned, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_years_gives_empty_result() {
        let params = InvestmentParameters::new(1_000.0, 50.0, 5.0, 0, CompoundFrequency::Monthly);
        let result = project(&params);
        assert!(result.yearly_breakdown.is_empty());
        assert_eq!(result.future_value, 0.0);
        assert_eq!(result.total_contributions, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_breakdown_indexed_in_order() {
        for years in [1, 2, 7, 40] {
            let params = InvestmentParameters::new(500.0, 25.0, 4.5, years, CompoundFrequency::Quarterly);
            let result = project(&params);
            assert_eq!(result.yearly_breakdown.len(), years as usize);
            for (i, entry) in result.yearly_breakdown.iter().enumerate() {
                assert_eq!(entry.year, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_contribution_accounting_ignores_frequency() {
        for freq in CompoundFrequency::ALL {
            let params = InvestmentParameters::new(2_500.0, 75.0, 6.0, 15, freq);
            for entry in &project(&params).yearly_breakdown {
                assert_eq!(entry.total_contributions, 2_500.0 + 75.0 * entry.year as f64 * 12.0);
            }
        }
    }

    #[test]
    fn test_monotonic_and_non_negative_interest() {
        for freq in CompoundFrequency::ALL {
            let params = InvestmentParameters::new(10_000.0, 200.0, 9.5, 30, freq);
            let result = project(&params);
            for pair in result.yearly_breakdown.windows(2) {
                assert!(pair[1].future_value >= pair[0].future_value);
            }
            assert!(result.yearly_breakdown.iter().all(|e| e.interest_earned >= 0.0));
        }
    }

    #[test]
    fn test_more_frequent_compounding_grows_faster() {
        let base = InvestmentParameters::new(50_000.0, 1_000.0, 8.0, 25, CompoundFrequency::Monthly);
        let final_values: Vec<f64> = CompoundFrequency::ALL
            .iter()
            .map(|&freq| project(&base.with_frequency(freq)).future_value)
            .collect();

        // daily >= monthly >= quarterly >= annually
        for pair in final_values.windows(2) {
            assert!(pair[0] >= pair[1], "{:?}", final_values);
        }
    }

    #[test]
    fn test_summary_matches_last_year() {
        let result = project(&scenario_params());
        let last = result.final_entry().unwrap();
        assert_eq!(last.year, 20);
        assert_eq!(result.future_value, last.future_value);
        assert_eq!(result.total_contributions, last.total_contributions);
        assert_eq!(result.total_interest, last.future_value - last.total_contributions);
    }

    #[test]
    fn test_pure_function() {
        let params = scenario_params();
        assert_eq!(project(&params), project(&params));
    }
}
