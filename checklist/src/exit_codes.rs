//! Stable exit codes for the checklist CLI.

/// Session finished normally, or an in-session error was reported to the operator.
pub const OK: i32 = 0;
/// The checklist document could not be found at startup.
pub const MISSING_INPUT: i32 = 1;
/// Configuration or other startup failure before the session began.
pub const INVALID: i32 = 2;
