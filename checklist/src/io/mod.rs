//! I/O helpers for the checklist runner.

pub mod checklist;
pub mod config;
pub mod console;
pub mod report;
