//! Compound Growth - Projection engine for investments with monthly contributions
//!
//! This library provides:
//! - Normalization of locale-formatted amount, rate and year input
//! - An explicit "ready to calculate" gate with reasons
//! - The year-by-year compound growth projection (daily, monthly, quarterly, annual compounding)
//! - Batch and frequency-comparison runs
//! - Display helpers kept apart from the engine

pub mod config;
pub mod display;
pub mod error;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use config::GateConfig;
pub use error::GrowthError;
pub use params::{check_readiness, CompoundFrequency, InvestmentForm, InvestmentParameters, RawParameters, Readiness};
pub use projection::{project, ProjectionReport, ProjectionResult, YearlyBreakdownEntry};
pub use scenario::ScenarioRunner;
