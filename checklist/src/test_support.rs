//! Test-only helpers for constructing checklists and sessions.

use crate::core::parser::{PairingMode, parse_checklist};
use crate::core::types::{Section, Status, TestItem};
use crate::session::Session;

/// One section, two unchecked tests.
pub const SMOKE_CHECKLIST: &str = "\
# Site Testing Checklist

## 1. Smoke Tests

| Test | Description | Result |
|------|-------------|--------|
| ☐ Load homepage | Page renders | 
| ☐ Click login | Login form appears |
";

/// Create a section whose items are named `names`, with `<name> description`.
pub fn section(title: &str, names: &[&str]) -> Section {
    Section {
        title: title.to_string(),
        items: names
            .iter()
            .map(|name| TestItem::new(*name, format!("{name} description")))
            .collect(),
    }
}

/// Session parsed from [`SMOKE_CHECKLIST`], all items untested.
pub fn smoke_session() -> Session {
    Session::from_sections(parse_checklist(SMOKE_CHECKLIST, PairingMode::Structural).sections)
}

/// Smoke session with the first test passed and the second failed.
pub fn recorded_session() -> Session {
    let mut session = smoke_session();
    if let Some(item) = session.item_mut(0, 0) {
        item.status = Status::Pass;
    }
    if let Some(item) = session.item_mut(0, 1) {
        item.status = Status::Fail;
        item.notes = Some("Button missing".to_string());
    }
    session
}
