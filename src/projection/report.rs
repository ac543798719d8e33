//! Serialized outputs: JSON report and breakdown CSV

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::breakdown::ProjectionResult;
use crate::error::Result;
use crate::params::InvestmentParameters;

/// Projection together with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: InvestmentParameters,
    #[serde(flatten)]
    pub result: ProjectionResult,
}

impl ProjectionReport {
    pub fn new(parameters: InvestmentParameters, result: ProjectionResult) -> Self {
        Self {
            generated_at: Utc::now(),
            parameters,
            result,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// CSV layout of one breakdown row, in table column order
#[derive(Debug, Serialize)]
struct BreakdownCsvRow {
    year: u32,
    total_contributions: f64,
    interest_earned: f64,
    future_value: f64,
}

/// Write the yearly breakdown as CSV with a header row
pub fn write_breakdown_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in &result.yearly_breakdown {
        csv_writer.serialize(BreakdownCsvRow {
            year: entry.year,
            total_contributions: entry.total_contributions,
            interest_earned: entry.interest_earned,
            future_value: entry.future_value,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CompoundFrequency;
    use crate::projection::{project, YearlyBreakdownEntry};

    #[test]
    fn test_breakdown_csv_layout() {
        let result = ProjectionResult::from_breakdown(vec![
            YearlyBreakdownEntry::new(1, 100.0, 112.0),
            YearlyBreakdownEntry::new(2, 100.0, 125.44),
        ]);

        let mut buffer = Vec::new();
        write_breakdown_csv(&mut buffer, &result).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,total_contributions,interest_earned,future_value");
        assert_eq!(lines[1], "1,100.0,12.0,112.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_report_json_flattens_result() {
        let params = InvestmentParameters::new(100.0, 0.0, 12.0, 1, CompoundFrequency::Annually);
        let report = ProjectionReport::new(params, project(&params));
        let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert!(json["generatedAt"].is_string());
        assert_eq!(json["parameters"]["compoundFrequency"], "annually");
        assert_eq!(json["yearlyBreakdown"].as_array().map(|a| a.len()), Some(1));
        assert!(json["futureValue"].as_f64().unwrap() > 111.99);
    }
}
