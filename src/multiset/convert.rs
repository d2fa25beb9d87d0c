use std::iter;

use crate::error::HatError;
use crate::multiset::Multiset;
use crate::types::{Count, Label, LabelId};

/// Flattens (label, count) pairs into a pool holding each label `count`
/// times, in input order.
///
/// Fails on the first negative count without producing any output.
pub fn expand<'a, I>(counts: I) -> Result<Vec<Label>, HatError>
where
    I: IntoIterator<Item = (&'a str, Count)>,
{
    let pairs: Vec<(&str, Count)> = counts.into_iter().collect();

    if let Some(&(label, count)) = pairs.iter().find(|&&(_, count)| count < 0) {
        return Err(HatError::InvalidCount { label: label.to_owned(), count });
    }

    let total = pairs.iter().map(|&(_, count)| count as usize).sum();
    let mut expanded = Vec::with_capacity(total);

    for (label, count) in pairs {
        expanded.extend(iter::repeat_n(label, count as usize).map(str::to_owned));
    }

    Ok(expanded)
}

/// Same as [`expand`], but yields label ids of an already validated multiset.
pub(crate) fn expand_ids(multiset: &Multiset) -> Vec<LabelId> {
    let mut expanded = Vec::with_capacity(multiset.total());

    for index in 0..multiset.len() {
        let id = LabelId::from_index(index);
        expanded.extend(iter::repeat_n(id, multiset.count(id) as usize));
    }

    expanded
}

/// Counts occurrences of each distinct label. Labels keep the order of their
/// first appearance; labels that never appear are absent.
pub fn tally<I>(items: I) -> Multiset
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = Multiset::new();
    for item in items {
        counts.bump(item.as_ref());
    }
    counts
}
