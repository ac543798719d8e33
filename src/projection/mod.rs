//! Growth projection engine and its outputs

mod breakdown;
mod engine;
mod rates;
mod report;

pub use breakdown::{ProjectionResult, YearlyBreakdownEntry};
pub use engine::{future_value_of_contributions, future_value_of_principal, project, project_year, MONTHS_PER_YEAR};
pub use rates::GrowthRates;
pub use report::{write_breakdown_csv, ProjectionReport};
