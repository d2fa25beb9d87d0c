use thiserror::Error;

use crate::types::Count;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HatError {
    /// A label was given a count below zero.
    #[error("negative count not permitted: {label}={count}")]
    InvalidCount { label: String, count: Count },

    #[error("invalid trial parameters: {0}")]
    InvalidTrialParameters(String),

    #[error("parse error: {0}")]
    Parse(String),
}
