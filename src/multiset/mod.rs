mod convert;
mod counts;
mod parse;

pub use convert::{expand, tally};
pub(crate) use convert::expand_ids;
pub use counts::Multiset;
