use std::collections::BTreeMap;

/// Count of registrations per calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearSummary {
    counts: BTreeMap<i32, u64>,
}

impl YearSummary {
    pub fn record(&mut self, year: i32) {
        *self.counts.entry(year).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, year: i32) -> u64 {
        self.counts.get(&year).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.counts.iter().map(|(&year, &count)| (year, count))
    }
}
