//! Result artifacts written when the operator saves and exits.
//!
//! Two files sit next to the checklist: `<stem>-results.json` (the session
//! exactly as held) and `<stem>-results.md` (per-section summary tables).
//! JSON is written first. The pair is not written atomically.
//!
//! Every section in the session is reported, including numbered headings that
//! received no test table; those show all-zero counts and an empty table.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::summary::StatusCounts;
use crate::session::Session;

/// Locations of the two result artifacts for one checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
}

impl ReportPaths {
    /// Derive artifact paths from the checklist path (extension replaced).
    pub fn for_checklist(checklist_path: &Path) -> Result<Self> {
        let stem = checklist_path
            .file_stem()
            .ok_or_else(|| anyhow!("no file name in {}", checklist_path.display()))?
            .to_string_lossy();
        Ok(Self {
            json_path: checklist_path.with_file_name(format!("{stem}-results.json")),
            markdown_path: checklist_path.with_file_name(format!("{stem}-results.md")),
        })
    }
}

/// Write both artifacts, overwriting earlier ones.
pub fn write_reports(
    session: &Session,
    checklist_path: &Path,
    report_title: &str,
    date: NaiveDate,
) -> Result<ReportPaths> {
    let paths = ReportPaths::for_checklist(checklist_path)?;
    write_json(&paths.json_path, session)?;
    debug!(path = %paths.json_path.display(), "json results written");
    let markdown = render_markdown(session, report_title, date);
    fs::write(&paths.markdown_path, markdown)
        .with_context(|| format!("write {}", paths.markdown_path.display()))?;
    info!(
        json = %paths.json_path.display(),
        markdown = %paths.markdown_path.display(),
        "reports written"
    );
    Ok(paths)
}

/// Re-read a structured results file.
pub fn load_results(path: &Path) -> Result<Session> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Render the human-readable report.
pub fn render_markdown(session: &Session, report_title: &str, date: NaiveDate) -> String {
    let mut buf = String::new();
    let _ = writeln!(buf, "# {report_title}\n");
    let _ = writeln!(buf, "Testing Date: {}\n", date.format("%Y-%m-%d"));

    for section in session.sections() {
        let counts = StatusCounts::from_items(&section.items);
        let _ = writeln!(buf, "## {}\n", section.title);
        let _ = writeln!(buf, "**Summary**: {counts}\n");
        buf.push_str("| Test | Description | Status | Notes |\n");
        buf.push_str("|------|-------------|--------|-------|\n");
        for item in &section.items {
            let _ = writeln!(
                buf,
                "| {} | {} | {} {} | {} |",
                table_cell(&item.test),
                table_cell(&item.description),
                item.status.glyph(),
                item.status.label(),
                table_cell(item.notes.as_deref().unwrap_or_default())
            );
        }
        buf.push('\n');
    }
    buf
}

/// Keep free text from breaking the table layout.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Serialize `value` to pretty-printed JSON with trailing newline.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
