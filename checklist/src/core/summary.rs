//! Outcome counting for menus and reports.

use std::fmt;

use crate::core::types::{Status, TestItem};

/// Number of items in each status category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pass: usize,
    pub fail: usize,
    pub warning: usize,
    pub not_tested: usize,
}

impl StatusCounts {
    pub fn from_items(items: &[TestItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            counts.record(item.status);
        }
        counts
    }

    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.pass += 1,
            Status::Fail => self.fail += 1,
            Status::Warning => self.warning += 1,
            Status::NotTested => self.not_tested += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.warning + self.not_tested
    }

    pub fn completed(&self) -> usize {
        self.total() - self.not_tested
    }
}

/// Renders the one-line report summary, e.g.
/// `✅ 1 Passed, ❌ 1 Failed, ⚠️ 0 Warnings, 0 Not Tested`.
impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Passed, {} {} Failed, {} {} Warnings, {} Not Tested",
            Status::Pass.glyph(),
            self.pass,
            Status::Fail.glyph(),
            self.fail,
            Status::Warning.glyph(),
            self.warning,
            self.not_tested
        )
    }
}
