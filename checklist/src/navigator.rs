//! Interactive control loop for a checklist session.
//!
//! Drives the [`Screen`] state machine through a [`Console`]: render the
//! current screen, read one line, apply [`transition`]. Test prompts run the
//! executor, which is the only place session items change. Reaching
//! [`Screen::Exit`] ends the loop; [`run`] then writes the reports.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info};

use crate::core::menu::{Screen, apply_outcome, parse_outcome, transition};
use crate::core::types::Status;
use crate::io::checklist::load_session;
use crate::io::config::ChecklistConfig;
use crate::io::console::Console;
use crate::io::report::{ReportPaths, write_reports};
use crate::session::Session;

/// Input used when stdin is exhausted: back out level by level, then save.
const END_OF_INPUT: &str = "0";

/// Load the checklist, run the menus until the operator exits, save reports.
pub fn run<R: BufRead, W: Write>(
    config: &ChecklistConfig,
    console: &mut Console<R, W>,
) -> Result<ReportPaths> {
    let mut session = load_session(&config.checklist_path, config.pairing)?;
    run_session(&mut session, console, &config.title)?;
    save_session(&session, console, config)
}

/// Run menus until the operator chooses to exit from the main menu.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    title: &str,
) -> Result<()> {
    let mut screen = Screen::MainMenu;
    let mut error: Option<&'static str> = None;
    loop {
        let input = match screen {
            Screen::Exit => return Ok(()),
            Screen::MainMenu => {
                render_main_menu(console, session, title, error)?;
                let prompt = format!("\nEnter your choice (0-{}): ", session.len());
                console.prompt(&prompt)?
            }
            Screen::SectionMenu { section } => {
                render_section_menu(console, session, section, error)?;
                let count = session.section(section).map_or(0, |s| s.items.len());
                let prompt = format!("\nSelect a test to execute (0-{count}): ");
                console.prompt(&prompt)?
            }
            Screen::TestPrompt { section, item } => {
                execute_test(console, session, section, item)?;
                Some(String::new())
            }
        };
        let input = input.unwrap_or_else(|| END_OF_INPUT.to_string());
        let step = transition(screen, &input, session);
        debug!(from = ?screen, to = ?step.next, rejected = step.error.is_some(), "menu transition");
        screen = step.next;
        error = step.error;
    }
}

/// Write both report artifacts and tell the operator where they went.
pub fn save_session<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
    config: &ChecklistConfig,
) -> Result<ReportPaths> {
    let today = Local::now().date_naive();
    let paths = write_reports(session, &config.checklist_path, &config.report_title, today)?;
    console.line(format!("Results saved to {}", display(&paths.json_path)))?;
    console.line(format!(
        "Markdown report saved to {}",
        display(&paths.markdown_path)
    ))?;
    console.line("\nTest results saved. Goodbye!")?;
    Ok(paths)
}

/// Show a failure that ended the session and wait for acknowledgement.
///
/// Errors only when the console itself cannot be written.
pub fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &anyhow::Error,
) -> Result<()> {
    console.line(format!("Error: {err:#}"))?;
    console.pause("Press Enter to exit...")
}

fn render_main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    title: &str,
    error: Option<&str>,
) -> Result<()> {
    console.clear_screen()?;
    console.line(format!("=== {title} ==="))?;
    console.line(format!(
        "Date: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    console.line("\nSelect a testing section to work on:")?;
    for (index, section) in session.sections().iter().enumerate() {
        console.line(format!(
            "{}. {} ({}/{} completed)",
            index + 1,
            section.title,
            section.completed(),
            section.items.len()
        ))?;
    }
    console.line("\n0. Save and exit")?;
    render_error(console, error)
}

fn render_section_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    section: usize,
    error: Option<&str>,
) -> Result<()> {
    let section = session
        .section(section)
        .with_context(|| format!("section {} not in session", section + 1))?;
    console.clear_screen()?;
    console.line(format!("=== Testing Section: {} ===", section.title))?;
    console.line("\nTests in this section:")?;
    for (index, item) in section.items.iter().enumerate() {
        console.line(format!("{}. {} {}", index + 1, item.status.glyph(), item.test))?;
    }
    console.line("\n0. Back to main menu")?;
    render_error(console, error)
}

fn render_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: Option<&str>,
) -> Result<()> {
    if let Some(message) = error {
        console.line(format!("\n{message} Please try again."))?;
    }
    Ok(())
}

/// Show one test, collect an outcome, and apply it to that item only.
fn execute_test<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    section: usize,
    item: usize,
) -> Result<()> {
    let test = session
        .item_mut(section, item)
        .with_context(|| format!("test {} in section {} not in session", item + 1, section + 1))?;

    console.clear_screen()?;
    console.line(format!("=== Executing Test: {} ===", test.test))?;
    console.line(format!("\nDescription: {}", test.description))?;
    console.line(format!("\nCurrent Status: {}", test.status))?;
    console.line("\nInstructions:")?;
    console.line("1. Manually test the feature according to the description")?;
    console.line("2. Record the test result below")?;
    console.line("\nTest Result Options:")?;
    console.line("1. Pass - Feature works as expected")?;
    console.line("2. Fail - Feature doesn't work")?;
    console.line("3. Warning - Feature works partially or has minor issues")?;
    console.line("4. Not Tested - Skip this test for now")?;

    let code = console.prompt("\nEnter test result (1-4): ")?;
    match code.as_deref().and_then(parse_outcome) {
        Some(status) => {
            let note = match status {
                Status::Fail => console.prompt("Enter issue details: ")?,
                Status::Warning => console.prompt("Enter warning details: ")?,
                Status::Pass | Status::NotTested => None,
            };
            apply_outcome(test, status, note);
            info!(test = %test.test, %status, "test result recorded");
            console.line("\nTest result recorded.")?;
        }
        None => {
            debug!(test = %test.test, input = ?code, "invalid test result code");
            console.line("\nInvalid choice. Test status not updated.")?;
        }
    }
    console.pause("Press Enter to continue...")
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
