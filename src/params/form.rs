//! Caller-owned calculator form state

use super::data::{CompoundFrequency, Field};
use super::normalize::{normalize_amount, normalize_rate, normalize_years};
use super::readiness::{check_readiness, RawParameters, Readiness};
use crate::config::GateConfig;

/// Session state of one calculator form
///
/// Holds normalized values only; the text a user typed is not kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentForm {
    values: RawParameters,
    default_frequency: CompoundFrequency,

    /// Whether the yearly table is expanded
    pub show_breakdown: bool,
}

impl InvestmentForm {
    /// Empty form preselecting the configured frequency
    pub fn new(config: &GateConfig) -> Self {
        let mut form = Self {
            default_frequency: config.default_frequency,
            ..Self::default()
        };
        form.values.compound_frequency = config.default_frequency;
        form
    }

    /// Store text typed into a field, normalized for that field
    pub fn update(&mut self, field: Field, text: &str) {
        let value = match field {
            Field::InitialInvestment | Field::MonthlyContribution => normalize_amount(text),
            Field::AnnualInterestRate => normalize_rate(text),
            Field::Years => normalize_years(text),
        };
        self.values.set(field, value);
    }

    pub fn set_frequency(&mut self, frequency: CompoundFrequency) {
        self.values.compound_frequency = frequency;
    }

    pub fn toggle_breakdown(&mut self) {
        self.show_breakdown = !self.show_breakdown;
    }

    pub fn values(&self) -> &RawParameters {
        &self.values
    }

    pub fn readiness(&self, config: &GateConfig) -> Readiness {
        check_readiness(&self.values, config)
    }

    /// Clear every field and collapse the breakdown
    pub fn reset(&mut self) {
        self.values = RawParameters {
            compound_frequency: self.default_frequency,
            ..RawParameters::default()
        };
        self.show_breakdown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InvestmentForm {
        let mut form = InvestmentForm::new(&GateConfig::default());
        form.update(Field::InitialInvestment, "100.000.000 ₫");
        form.update(Field::MonthlyContribution, "5.000.000 ₫");
        form.update(Field::AnnualInterestRate, "7,2 %");
        form.update(Field::Years, "20");
        form
    }

    #[test]
    fn test_filled_form_is_ready() {
        let form = filled_form();
        let readiness = form.readiness(&GateConfig::default());
        let params = readiness.parameters().expect("form should be ready");
        assert_eq!(params.monthly_contribution, 5_000_000.0);
        assert_eq!(params.annual_interest_rate, 7.2);
        assert_eq!(params.compound_frequency, CompoundFrequency::Monthly);
    }

    #[test]
    fn test_clearing_a_field_blocks_calculation() {
        let mut form = filled_form();
        form.update(Field::Years, "");
        assert!(!form.readiness(&GateConfig::default()).is_ready());
        assert_eq!(form.values().years, None);
    }

    #[test]
    fn test_reset_restores_configured_frequency() {
        let config = GateConfig {
            default_frequency: CompoundFrequency::Quarterly,
            ..GateConfig::default()
        };
        let mut form = InvestmentForm::new(&config);
        form.update(Field::InitialInvestment, "1.000");
        form.set_frequency(CompoundFrequency::Daily);
        form.toggle_breakdown();

        form.reset();

        assert_eq!(form.values().initial_investment, None);
        assert_eq!(form.values().compound_frequency, CompoundFrequency::Quarterly);
        assert!(!form.show_breakdown);
    }
}
