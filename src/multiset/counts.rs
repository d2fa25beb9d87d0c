use std::fmt;

use indexmap::IndexMap;

use crate::error::HatError;
use crate::types::{Count, Label, LabelId};

/// Insertion-ordered mapping from label to a non-negative count.
///
/// A label whose count drops to zero keeps its key; it is simply not
/// drawable anymore. Equality ignores order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: IndexMap<Label, Count>,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a multiset from (label, count) pairs. A repeated label
    /// overwrites the earlier count but keeps its original position.
    pub fn try_from_pairs<I, L>(pairs: I) -> Result<Self, HatError>
    where
        I: IntoIterator<Item = (L, Count)>,
        L: Into<Label>,
    {
        let mut multiset = Multiset::new();
        for (label, count) in pairs {
            multiset.insert(label, count)?;
        }
        Ok(multiset)
    }

    /// Sets the count for `label`, returning the previous count if the label
    /// was already present.
    pub fn insert(&mut self, label: impl Into<Label>, count: Count) -> Result<Option<Count>, HatError> {
        let label = label.into();
        if count < 0 {
            return Err(HatError::InvalidCount { label, count });
        }
        Ok(self.counts.insert(label, count))
    }

    /// Count for `label`, zero when absent.
    pub fn get(&self, label: &str) -> Count {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Number of stored labels, zero-count labels included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> + '_ {
        self.counts
            .iter()
            .map(|(label, &count)| (label.as_str(), count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// Copy of this multiset with zero-count labels dropped.
    pub fn without_zeros(&self) -> Self {
        let mut counts = self.counts.clone();
        counts.retain(|_, count| *count > 0);
        Multiset { counts }
    }

    /// Zeroes every count while keeping all keys.
    pub fn reset(&mut self) {
        self.counts.values_mut().for_each(|count| *count = 0);
    }

    /// Returns `true` if every label in `target` occurs here at least as
    /// often as required. Labels missing from `self` count as zero.
    pub fn satisfies(&self, target: &Multiset) -> bool {
        target
            .iter()
            .all(|(label, required)| self.get(label) >= required)
    }

    #[inline(always)]
    pub(crate) fn label(&self, id: LabelId) -> &str {
        self.counts
            .get_index(id.index())
            .map(|(label, _)| label.as_str())
            .expect("LabelId out of range for multiset")
    }

    #[inline(always)]
    pub(crate) fn count(&self, id: LabelId) -> Count {
        self.counts
            .get_index(id.index())
            .map(|(_, &count)| count)
            .expect("LabelId out of range for multiset")
    }

    pub(crate) fn decrement(&mut self, id: LabelId) {
        if let Some((label, count)) = self.counts.get_index_mut(id.index()) {
            debug_assert!(*count > 0, "Decrementing exhausted label {}", label);
            *count -= 1;
        }
    }

    /// Adds one occurrence of `label`, appending it if unseen.
    pub(crate) fn bump(&mut self, label: &str) {
        *self.counts.entry(label.to_owned()).or_insert(0) += 1;
    }
}

impl fmt::Display for Multiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", label, count)?;
        }
        Ok(())
    }
}
