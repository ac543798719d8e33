//! Investment parameters: normalization, readiness gate and form state

mod data;
mod form;
pub mod loader;
pub mod normalize;
mod readiness;

pub use data::{CompoundFrequency, Field, InvestmentParameters};
pub use form::InvestmentForm;
pub use loader::{load_default_scenarios, load_scenarios, load_scenarios_from_reader, ScenarioRow};
pub use normalize::{normalize_amount, normalize_rate, normalize_years};
pub use readiness::{check_readiness, NotReadyReason, RawParameters, Readiness};
