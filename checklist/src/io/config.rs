//! Checklist runner configuration stored in `checklist.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::parser::PairingMode;

/// Conventional checklist location when neither CLI nor config names one.
pub const DEFAULT_CHECKLIST: &str = "FINAL-TESTING-CHECKLIST.md";

/// Runner configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below. Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Markdown checklist to run.
    pub checklist_path: PathBuf,

    /// Heading shown on the main menu.
    pub title: String,

    /// Top-level heading of the Markdown report.
    pub report_title: String,

    /// How test tables are assigned to section headings.
    pub pairing: PairingMode,

    /// Clear the terminal before each screen.
    pub clear_screen: bool,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            checklist_path: PathBuf::from(DEFAULT_CHECKLIST),
            title: "Site Testing Assistant".to_string(),
            report_title: "Site Testing Results".to_string(),
            pairing: PairingMode::Structural,
            clear_screen: true,
        }
    }
}

impl ChecklistConfig {
    pub fn validate(&self) -> Result<()> {
        if self.checklist_path.as_os_str().is_empty() {
            return Err(anyhow!("checklist_path must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(anyhow!("title must be non-empty"));
        }
        if self.report_title.trim().is_empty() {
            return Err(anyhow!("report_title must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ChecklistConfig::default()`.
pub fn load_config(path: &Path) -> Result<ChecklistConfig> {
    if !path.exists() {
        let cfg = ChecklistConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ChecklistConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
