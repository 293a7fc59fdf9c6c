//! Checklist data model.
//!
//! The serialized names are part of the structured report format and must
//! stay stable so saved results can be re-read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome recorded for a single test item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Tested")]
    NotTested,
    Pass,
    Fail,
    Warning,
}

impl Status {
    /// All statuses in report order.
    pub const ALL: [Status; 4] = [
        Status::Pass,
        Status::Fail,
        Status::Warning,
        Status::NotTested,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::NotTested => "Not Tested",
            Status::Pass => "Pass",
            Status::Fail => "Fail",
            Status::Warning => "Warning",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Status::NotTested => "☐",
            Status::Pass => "✅",
            Status::Fail => "❌",
            Status::Warning => "⚠️",
        }
    }

    /// Fail and Warning outcomes always collect a note from the operator.
    pub fn requires_notes(self) -> bool {
        matches!(self, Status::Fail | Status::Warning)
    }

    pub fn is_completed(self) -> bool {
        self != Status::NotTested
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a checklist table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestItem {
    pub test: String,
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TestItem {
    pub fn new(test: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            description: description.into(),
            status: Status::NotTested,
            notes: None,
        }
    }
}

/// A numbered checklist heading and the test items assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<TestItem>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn completed(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status.is_completed())
            .count()
    }
}
