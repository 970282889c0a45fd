// Drain report

use crate::domain::Category;
use serde::Serialize;

/// Counters collected over one drain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrainReport {
    /// Items removed from the queue
    pub polled: usize,
    pub domains: usize,
    pub emails: usize,
    pub phones: usize,
    /// Empty or unmatched items
    pub unclassified: usize,
    pub resolution_failures: usize,
    /// Records whose sink could not be opened
    pub discarded: usize,
    pub write_failures: usize,
}

impl DrainReport {
    pub(crate) fn record_written(&mut self, category: Category) {
        match category {
            Category::Domain => self.domains += 1,
            Category::Email => self.emails += 1,
            Category::Phone => self.phones += 1,
        }
    }

    /// Records written for a category
    pub fn written(&self, category: Category) -> usize {
        match category {
            Category::Domain => self.domains,
            Category::Email => self.emails,
            Category::Phone => self.phones,
        }
    }

    /// Records written across all categories
    pub fn total_written(&self) -> usize {
        self.domains + self.emails + self.phones
    }
}
