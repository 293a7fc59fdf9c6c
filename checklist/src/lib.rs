//! Interactive manual-testing checklist runner.
//!
//! Reads a Markdown checklist, walks a tester through its sections and test
//! items, records an outcome per item, and writes a JSON + Markdown report on
//! exit. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, counting, menu state
//!   machine). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (checklist file, console, config,
//!   report artifacts).
//!
//! Orchestration modules ([`session`], [`navigator`]) tie the two together for
//! the `checklist` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod navigator;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
