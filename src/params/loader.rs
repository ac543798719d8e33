//! Load batches of calculator inputs from CSV
//!
//! Expected columns:
//! label,initial_investment,monthly_contribution,annual_interest_rate,years,compound_frequency
//!
//! Cells hold the text a user would type, so `"100.000.000 ₫"` or `"7,2 %"`
//! are fine. An empty frequency cell takes the configured default.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::{info, warn};
use serde::Deserialize;

use super::data::CompoundFrequency;
use super::readiness::{check_readiness, RawParameters, Readiness};
use crate::config::GateConfig;
use crate::error::Result;

/// Sample scenario file shipped with the crate
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row, every cell kept as text
#[derive(Debug, Deserialize)]
struct CsvRow {
    label: String,
    #[serde(default)]
    initial_investment: String,
    #[serde(default)]
    monthly_contribution: String,
    #[serde(default)]
    annual_interest_rate: String,
    #[serde(default)]
    years: String,
    #[serde(default)]
    compound_frequency: String,
}

impl CsvRow {
    fn into_scenario(self, config: &GateConfig) -> Result<ScenarioRow> {
        let frequency = if self.compound_frequency.trim().is_empty() {
            config.default_frequency
        } else {
            self.compound_frequency.parse::<CompoundFrequency>()?
        };

        let raw = RawParameters::from_text(
            &self.initial_investment,
            &self.monthly_contribution,
            &self.annual_interest_rate,
            &self.years,
            frequency,
        );

        Ok(ScenarioRow {
            label: self.label,
            readiness: check_readiness(&raw, config),
        })
    }
}

/// One labelled input row after normalization and gating
#[derive(Debug, Clone)]
pub struct ScenarioRow {
    pub label: String,
    pub readiness: Readiness,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P, config: &GateConfig) -> Result<Vec<ScenarioRow>> {
    let reader = Reader::from_path(path.as_ref())?;
    info!("loading scenarios from {}", path.as_ref().display());
    collect_rows(reader, config)
}

/// Load the sample scenarios from the default location
pub fn load_default_scenarios(config: &GateConfig) -> Result<Vec<ScenarioRow>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH, config)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: Read>(reader: R, config: &GateConfig) -> Result<Vec<ScenarioRow>> {
    collect_rows(Reader::from_reader(reader), config)
}

fn collect_rows<R: Read>(mut reader: Reader<R>, config: &GateConfig) -> Result<Vec<ScenarioRow>> {
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let scenario = row.into_scenario(config)?;
        if let Readiness::NotReady(reasons) = &scenario.readiness {
            warn!("scenario {:?} not ready: {} problem(s)", scenario.label, reasons.len());
        }
        rows.push(scenario);
    }

    Ok(rows)
}
