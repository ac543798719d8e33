//! Scenario runner for batch projections
//!
//! Projects many parameter sets in parallel, and compares one parameter set
//! across every compounding frequency.

use log::info;
use rayon::prelude::*;

use crate::params::{CompoundFrequency, InvestmentParameters, Readiness, ScenarioRow};
use crate::projection::{project, ProjectionResult};

/// Outcome for one labelled scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub label: String,
    pub parameters: InvestmentParameters,
    pub result: ProjectionResult,
}

/// Batch projection runner
///
/// # Example
/// ```
/// use compound_growth::{CompoundFrequency, InvestmentParameters, ScenarioRunner};
///
/// let params = InvestmentParameters::new(1_000.0, 100.0, 6.0, 10, CompoundFrequency::Monthly);
/// let runner = ScenarioRunner::new();
/// let by_frequency = runner.compare_frequencies(&params);
/// assert_eq!(by_frequency.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Run sequentially instead of on the rayon pool
    sequential: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequential() -> Self {
        Self { sequential: true }
    }

    /// Project a single parameter set
    pub fn run(&self, params: &InvestmentParameters) -> ProjectionResult {
        project(params)
    }

    /// Project every parameter set, results in input order
    pub fn run_batch(&self, params: &[InvestmentParameters]) -> Vec<ProjectionResult> {
        if self.sequential {
            params.iter().map(project).collect()
        } else {
            params.par_iter().map(project).collect()
        }
    }

    /// Project the ready rows of a loaded batch, skipping the rest
    pub fn run_rows(&self, rows: &[ScenarioRow]) -> Vec<ScenarioOutcome> {
        let ready: Vec<(&str, InvestmentParameters)> = rows
            .iter()
            .filter_map(|row| match &row.readiness {
                Readiness::Ready(params) => Some((row.label.as_str(), *params)),
                Readiness::NotReady(_) => None,
            })
            .collect();
        info!("projecting {} of {} scenarios", ready.len(), rows.len());

        let params: Vec<InvestmentParameters> = ready.iter().map(|(_, p)| *p).collect();
        ready
            .into_iter()
            .zip(self.run_batch(&params))
            .map(|((label, parameters), result)| ScenarioOutcome {
                label: label.to_string(),
                parameters,
                result,
            })
            .collect()
    }

    /// Same parameters under daily, monthly, quarterly and annual compounding
    pub fn compare_frequencies(&self, params: &InvestmentParameters) -> Vec<(CompoundFrequency, ProjectionResult)> {
        let variants: Vec<InvestmentParameters> = CompoundFrequency::ALL
            .iter()
            .map(|&freq| params.with_frequency(freq))
            .collect();

        CompoundFrequency::ALL
            .into_iter()
            .zip(self.run_batch(&variants))
            .collect()
    }
}
