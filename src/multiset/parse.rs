use std::str::FromStr;

use crate::error::HatError;
use crate::multiset::Multiset;
use crate::types::Count;

impl FromStr for Multiset {
    type Err = HatError;

    /// Parses `label=count` pairs separated by commas and/or whitespace,
    /// e.g. `"black=6,red=4,green=3"`. An empty string yields an empty
    /// multiset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut multiset = Multiset::new();

        let pairs = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|pair| !pair.is_empty());

        for pair in pairs {
            let (label, count) = pair
                .split_once('=')
                .ok_or_else(|| HatError::Parse(format!("expected label=count, got '{}'", pair)))?;

            if label.is_empty() {
                return Err(HatError::Parse(format!("missing label in '{}'", pair)));
            }

            let count = count
                .parse::<Count>()
                .map_err(|e| HatError::Parse(format!("invalid count in '{}': {}", pair, e)))?;

            multiset.insert(label, count)?;
        }

        Ok(multiset)
    }
}
