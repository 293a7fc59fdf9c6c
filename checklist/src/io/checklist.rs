//! Reading the checklist document and building the session from it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::parser::{PairingMode, parse_checklist};
use crate::session::Session;

/// The checklist document does not exist.
///
/// Kept as a distinct type so the binary can map it to its own exit code via
/// `anyhow::Error::downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingChecklistError {
    pub path: PathBuf,
}

impl fmt::Display for MissingChecklistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not find {}", self.path.display())
    }
}

impl std::error::Error for MissingChecklistError {}

/// Read the raw checklist text.
pub fn read_checklist(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MissingChecklistError {
            path: path.to_path_buf(),
        }
        .into());
    }
    fs::read_to_string(path).with_context(|| format!("read checklist {}", path.display()))
}

/// Read and parse the checklist into a fresh session (every item untested).
pub fn load_session(path: &Path, pairing: PairingMode) -> Result<Session> {
    let contents = read_checklist(path)?;
    let parsed = parse_checklist(&contents, pairing);
    if parsed.dropped_tables > 0 {
        warn!(
            dropped_tables = parsed.dropped_tables,
            %pairing,
            "test tables without a section were ignored"
        );
    }
    let session = Session::from_sections(parsed.sections);
    info!(
        path = %path.display(),
        sections = session.len(),
        items = session.item_count(),
        "checklist loaded"
    );
    Ok(session)
}
