use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::Rng;

use crate::error::HatError;
use crate::multiset::{Multiset, expand_ids};
use crate::types::{Count, Label, LabelId};

/// A hat of labeled balls that are drawn without replacement.
///
/// `count` and `contents` always describe the same population: every ball
/// removed from `contents` decrements its label in `count`.
#[derive(Clone, Debug)]
pub struct Hat {
    count: Multiset,
    contents: Vec<LabelId>,
}

impl Hat {
    pub fn new(count: Multiset) -> Self {
        let contents = expand_ids(&count);
        Hat { count, contents }
    }

    pub fn try_from_pairs<I, L>(pairs: I) -> Result<Self, HatError>
    where
        I: IntoIterator<Item = (L, Count)>,
        L: Into<Label>,
    {
        Multiset::try_from_pairs(pairs).map(Hat::new)
    }

    /// Remaining count per label, including labels that are used up.
    pub fn counts(&self) -> &Multiset {
        &self.count
    }

    /// Number of balls still in the hat.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Draws `amount` balls using the thread-local generator.
    pub fn draw(&mut self, amount: usize) -> Vec<Label> {
        self.draw_with(amount, &mut rand::rng())
    }

    /// Removes `amount` balls chosen uniformly at random and returns their
    /// labels in removal order.
    ///
    /// Asking for at least as many balls as remain is not an error: the hat
    /// is emptied, every ball is returned and all counts drop to zero.
    pub fn draw_with<R: Rng>(&mut self, amount: usize, rng: &mut R) -> Vec<Label> {
        if amount >= self.contents.len() {
            trace!("Draining {} balls (requested {})", self.contents.len(), amount);

            let count = &self.count;
            let drained = self
                .contents
                .drain(..)
                .map(|id| count.label(id).to_owned())
                .collect();

            self.count.reset();
            return drained;
        }

        let mut removed = Vec::with_capacity(amount);

        for _ in 0..amount {
            let position = rng.random_range(0..self.contents.len());
            let id = self.contents.swap_remove(position);

            self.count.decrement(id);
            removed.push(self.count.label(id).to_owned());
        }

        removed
    }
}

impl FromStr for Hat {
    type Err = HatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Multiset>().map(Hat::new)
    }
}

impl fmt::Display for Hat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hat({})", self.count)
    }
}
