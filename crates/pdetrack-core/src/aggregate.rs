//! Category aggregates and status classification
//!
//! Each category is summarized by the truncated mean of its items'
//! achievement percentages, and that mean is mapped to a three-level status.
//!
//! # Example
//!
//! ```rust
//! use pdetrack_core::aggregate::Status;
//!
//! assert_eq!(Status::from_mean(71), Status::OnTrack);
//! assert_eq!(Status::from_mean(70), Status::NeedsEffort);
//! assert_eq!(Status::from_mean(30), Status::HighPriority);
//! ```

use serde::{Deserialize, Serialize};

use crate::coerce::truncate_pct;
use crate::{Category, CategoryBucket};

// ============================================================================
// Status
// ============================================================================

/// Qualitative progress of a category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Mean above 70%
    OnTrack,
    /// Mean in (30%, 70%]
    NeedsEffort,
    /// Mean at or below 30%
    HighPriority,
}

impl Status {
    /// Classify a mean percentage
    pub const fn from_mean(mean_pct: i64) -> Self {
        if mean_pct > 70 {
            Status::OnTrack
        } else if mean_pct > 30 {
            Status::NeedsEffort
        } else {
            Status::HighPriority
        }
    }

    /// Stable identifier, as used in JSON output and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::OnTrack => "ON_TRACK",
            Status::NeedsEffort => "NEEDS_EFFORT",
            Status::HighPriority => "HIGH_PRIORITY",
        }
    }

    /// Message shown under the category banner
    pub fn message(&self) -> &'static str {
        match self {
            Status::OnTrack => "✅ Les objectifs sont en bonne voie d'être atteints.",
            Status::NeedsEffort => "⚠️ Des efforts constants sont encore requis.",
            Status::HighPriority => "🚨 Priorité élevée : phase de planification.",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Summary of one category bucket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: Category,
    /// Truncated mean of the items' achievement (0 when the bucket is empty)
    pub mean_pct: i64,
    pub status: Status,
    /// Number of items the mean was computed from
    pub item_count: usize,
}

impl CategoryAggregate {
    /// True when the mean stands for "no data" rather than measured progress
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Aggregate a bucket.
///
/// An empty bucket yields `mean_pct = 0` and therefore `HighPriority`;
/// `item_count` lets callers tell that case apart from real 0% progress.
pub fn aggregate(bucket: &CategoryBucket) -> CategoryAggregate {
    let mean_pct = mean_pct(bucket.records.iter().map(|r| r.achievement_pct));
    CategoryAggregate {
        category: bucket.category,
        mean_pct,
        status: Status::from_mean(mean_pct),
        item_count: bucket.len(),
    }
}

/// Truncated arithmetic mean, `0` for an empty input
pub fn mean_pct(values: impl IntoIterator<Item = f64>) -> i64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0;
    }
    truncate_pct(sum / count as f64)
}
