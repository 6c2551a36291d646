//! Grouping records into the five category buckets.

use serde::{Deserialize, Serialize};

use crate::{Category, Record};

/// The records of one category, in source order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub records: Vec<Record>,
}

impl CategoryBucket {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Result of partitioning a record set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// One bucket per category, always in [`Category::ALL`] order
    pub buckets: Vec<CategoryBucket>,
    /// Records whose category label matched none of the five
    pub unmatched: Vec<Record>,
}

impl Partition {
    pub fn bucket(&self, category: Category) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }
}

/// Split records into category buckets.
///
/// Every known category gets a bucket, even when no record belongs to it.
/// Records keep their relative source order inside each bucket.
pub fn partition(records: impl IntoIterator<Item = Record>) -> Partition {
    let mut buckets: Vec<CategoryBucket> = Category::ALL.into_iter().map(CategoryBucket::new).collect();
    let mut unmatched = Vec::new();

    for record in records {
        match record.category {
            Some(category) => {
                // ALL is indexed by number - 1
                let idx = usize::from(category.number()) - 1;
                buckets[idx].records.push(record);
            }
            None => unmatched.push(record),
        }
    }

    Partition { buckets, unmatched }
}
