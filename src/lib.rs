pub mod error;
pub mod experiment;
pub mod hat;
pub mod metrics;
pub mod multiset;
pub mod types;
pub mod utils;

pub use error::HatError;
pub use experiment::{Estimate, Experiment, run_experiment};
pub use hat::Hat;
pub use multiset::{Multiset, expand, tally};
