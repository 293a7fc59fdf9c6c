//! Interactive manual-testing checklist runner.
//!
//! Loads a Markdown checklist, lets the tester record an outcome for every
//! test item, and writes `<stem>-results.json` / `<stem>-results.md` beside
//! the checklist on exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use checklist::core::parser::PairingMode;
use checklist::exit_codes;
use checklist::io::checklist::MissingChecklistError;
use checklist::io::config::{ChecklistConfig, load_config};
use checklist::io::console::Console;
use checklist::{logging, navigator};

#[derive(Parser)]
#[command(
    name = "checklist",
    version,
    about = "Walk through a manual testing checklist and record results"
)]
struct Cli {
    /// Markdown checklist to run (default: FINAL-TESTING-CHECKLIST.md).
    checklist: Option<PathBuf>,

    /// Optional TOML config file.
    #[arg(long, default_value = "checklist.toml")]
    config: PathBuf,

    /// How test tables are assigned to sections: `structural` or `positional`.
    #[arg(long)]
    pairing: Option<PairingMode>,

    /// Do not clear the terminal between screens.
    #[arg(long)]
    no_clear: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    };

    let mut console = Console::stdio(config.clear_screen);
    if let Err(err) = navigator::run(&config, &mut console) {
        if err.downcast_ref::<MissingChecklistError>().is_some() {
            eprintln!("Error: {:#}", err);
            std::process::exit(exit_codes::MISSING_INPUT);
        }
        error!(error = %format!("{err:#}"), "session aborted");
        if let Err(console_err) = navigator::report_failure(&mut console, &err) {
            eprintln!("Error: {:#}", err);
            eprintln!("(console unavailable: {:#})", console_err);
        }
    }
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<ChecklistConfig> {
    let mut config = load_config(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    if let Some(path) = &cli.checklist {
        config.checklist_path = path.clone();
    }
    if let Some(pairing) = cli.pairing {
        config.pairing = pairing;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["checklist"]);
        assert!(cli.checklist.is_none());
        assert_eq!(cli.config, PathBuf::from("checklist.toml"));
        assert!(cli.pairing.is_none());
        assert!(!cli.no_clear);
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::parse_from([
            "checklist",
            "QA.md",
            "--pairing",
            "positional",
            "--no-clear",
        ]);
        assert_eq!(cli.checklist, Some(PathBuf::from("QA.md")));
        assert_eq!(cli.pairing, Some(PairingMode::Positional));
        assert!(cli.no_clear);
    }

    #[test]
    fn cli_overrides_config_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("checklist.toml");
        std::fs::write(&config_path, "checklist_path = \"FROM-CONFIG.md\"\n").expect("config");
        let cli = Cli::parse_from([
            "checklist".to_string(),
            "FROM-CLI.md".to_string(),
            "--config".to_string(),
            config_path.display().to_string(),
        ]);
        let config = resolve_config(&cli).expect("resolve");
        assert_eq!(config.checklist_path, PathBuf::from("FROM-CLI.md"));
        assert!(config.clear_screen);
    }

    #[test]
    fn rejects_unknown_pairing_flag() {
        let result = Cli::try_parse_from(["checklist", "--pairing", "nearest"]);
        assert!(result.is_err());
    }
}
