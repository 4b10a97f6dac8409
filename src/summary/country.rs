use core::cmp::Reverse;
use std::collections::BTreeMap;

/// Count of records per country name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySummary {
    counts: BTreeMap<String, u64>,
}

impl CountrySummary {
    pub fn record(&mut self, country: &str) {
        if let Some(count) = self.counts.get_mut(country) {
            *count += 1;
        } else {
            let _ = self.counts.insert(country.to_string(), 1);
        }
    }

    #[must_use]
    pub fn count(&self, country: &str) -> u64 {
        self.counts.get(country).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct countries seen.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Countries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(country, &count)| (country.as_str(), count))
    }

    /// Countries sorted by descending count, ties broken alphabetically.
    #[must_use]
    pub fn by_count(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|&(country, count)| (Reverse(count), country));
        sorted
    }
}
