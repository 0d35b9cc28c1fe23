//! Duration bucket classification.
//!
//! A file is reported under a nominal runtime rather than its exact length:
//! with the default buckets a 47 minute file is a "60 minute" file. Durations
//! longer than every bucket are clamped into the largest one.

use crate::error::{CoreError, CoreResult};

/// Descending, duplicate-free set of bucket thresholds in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBuckets {
    thresholds: Vec<u32>,
}

impl DurationBuckets {
    /// Builds the bucket set from caller-supplied thresholds in any order.
    ///
    /// # Errors
    ///
    /// `CoreError::Config` when the list is empty or contains a zero.
    pub fn new(thresholds: &[u32]) -> CoreResult<Self> {
        if thresholds.is_empty() {
            return Err(CoreError::Config(
                "at least one duration bucket is required".to_string(),
            ));
        }
        if thresholds.contains(&0) {
            return Err(CoreError::Config(
                "duration buckets must be positive minute counts".to_string(),
            ));
        }

        let mut sorted = thresholds.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        Ok(Self { thresholds: sorted })
    }

    /// Thresholds, largest first.
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Returns the smallest bucket that holds `minutes`, or the largest bucket
    /// when `minutes` exceeds all of them.
    #[must_use]
    pub fn classify(&self, minutes: u64) -> u32 {
        let mut bucket = self.thresholds[0];
        for &threshold in &self.thresholds[1..] {
            if minutes <= u64::from(threshold) {
                bucket = threshold;
            } else {
                break;
            }
        }
        bucket
    }
}

/// Report label for a bucket, e.g. `05 минут`.
#[must_use]
pub fn duration_label(bucket: u32) -> String {
    format!("{bucket:02} минут")
}
