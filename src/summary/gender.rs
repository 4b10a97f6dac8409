use crate::sample::Gender;
use std::collections::BTreeMap;

/// Count of records per gender label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderSummary {
    counts: BTreeMap<Gender, u64>,
}

impl GenderSummary {
    pub fn record(&mut self, gender: Gender) {
        *self.counts.entry(gender).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, gender: Gender) -> u64 {
        self.counts.get(&gender).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the number of records fed in.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gender, u64)> + '_ {
        self.counts.iter().map(|(&gender, &count)| (gender, count))
    }
}
