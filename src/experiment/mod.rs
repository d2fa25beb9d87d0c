mod estimate;
mod experiment;
mod pooled;

pub use estimate::Estimate;
pub use experiment::{Experiment, run_experiment};

#[cfg(test)]
mod tests;
