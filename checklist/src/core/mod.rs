//! Deterministic, pure logic shared by the checklist runner.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod menu;
pub mod parser;
pub mod summary;
pub mod types;
