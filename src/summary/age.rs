use std::collections::BTreeMap;

/// Width of one histogram bucket in years.
const DECADE: u32 = 10;

/// Histogram of ages grouped into decade buckets.
///
/// A bucket key is the lower bound of its decade: ages 0–9 land in bucket 0,
/// age 45 lands in bucket 40. The union of bucket counts equals the number
/// of records fed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeHistogram {
    buckets: BTreeMap<u32, u64>,
}

impl AgeHistogram {
    pub fn record(&mut self, age: u32) {
        *self.buckets.entry(bucket_for(age)).or_insert(0) += 1;
    }

    #[must_use]
    pub fn count(&self, bucket: u32) -> u64 {
        self.buckets.get(&bucket).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in ascending age order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.buckets.iter().map(|(&bucket, &count)| (bucket, count))
    }
}

/// Lower bound of the decade containing `age`.
#[must_use]
pub const fn bucket_for(age: u32) -> u32 {
    age / DECADE * DECADE
}

/// Display label for a bucket: bucket 40 renders as `40s`.
#[must_use]
pub fn bucket_label(bucket: u32) -> String {
    format!("{bucket}s")
}
