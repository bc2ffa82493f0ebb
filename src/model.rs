use crate::calendar::DAYS_IN_LAST_SIX_MONTHS;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// The part of a commit the heatmap cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMeta {
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
}

impl CommitMeta {
    pub fn new(author_email: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            author_email: author_email.into(),
            timestamp,
        }
    }
}

/// Commit counts keyed by day bucket.
///
/// Buckets 1 through 183 always exist; bucket 0 and the offset tail past 183
/// only show up once a commit lands there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCounts {
    buckets: BTreeMap<u32, u32>,
}

impl CommitCounts {
    pub fn new() -> Self {
        Self {
            buckets: (1..=DAYS_IN_LAST_SIX_MONTHS).rev().map(|day| (day, 0)).collect(),
        }
    }

    pub fn increment(&mut self, bucket: u32) {
        *self.buckets.entry(bucket).or_insert(0) += 1;
    }

    pub fn get(&self, bucket: u32) -> u32 {
        self.buckets.get(&bucket).copied().unwrap_or(0)
    }

    pub fn contains(&self, bucket: u32) -> bool {
        self.buckets.contains_key(&bucket)
    }

    /// Buckets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.buckets.iter().map(|(k, v)| (*k, *v))
    }

    pub fn total(&self) -> u64 {
        self.buckets.values().map(|v| u64::from(*v)).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for CommitCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u32, u32)> for CommitCounts {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self {
            buckets: iter.into_iter().collect(),
        }
    }
}

/// One week of counts, oldest day first.
pub type WeekColumn = Vec<u32>;

/// Sealed week columns keyed by week index, 0 being the current week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    weeks: BTreeMap<u32, WeekColumn>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seal(&mut self, week: u32, column: WeekColumn) {
        self.weeks.insert(week, column);
    }

    pub fn get(&self, week: u32) -> Option<&[u32]> {
        self.weeks.get(&week).map(Vec::as_slice)
    }

    /// Count at `day` of `week`, treating missing weeks and days as empty.
    pub fn count(&self, week: u32, day: u32) -> u32 {
        self.get(week)
            .and_then(|col| col.get(day as usize).copied())
            .unwrap_or(0)
    }

    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
