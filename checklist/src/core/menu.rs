//! Menu state machine and outcome application.
//!
//! Screens form a small finite-state machine. [`transition`] is pure: it maps
//! the current screen plus one line of operator input to the next screen, and
//! never touches session state. Item mutation happens only in
//! [`apply_outcome`].

use crate::core::types::{Status, TestItem};
use crate::session::Session;

/// Current screen. Indices are zero-based positions into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    SectionMenu { section: usize },
    TestPrompt { section: usize, item: usize },
    Exit,
}

/// Parsed menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `0`: go back one level (or save and exit from the main menu).
    Back,
    /// One-based entry number within range.
    Select(usize),
    /// A number outside the listed entries.
    OutOfRange,
    /// Not a number at all.
    Invalid,
}

/// Parse a menu line against a menu with `max` numbered entries.
pub fn parse_choice(input: &str, max: usize) -> Choice {
    match input.trim().parse::<usize>() {
        Ok(0) => Choice::Back,
        Ok(n) if n <= max => Choice::Select(n),
        Ok(_) => Choice::OutOfRange,
        Err(_) if is_integer(input.trim()) => Choice::OutOfRange,
        Err(_) => Choice::Invalid,
    }
}

/// Negative or overflowing numbers are still numbers, just not listed ones.
fn is_integer(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Result of feeding one input line to a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Screen,
    /// Inline error to show when the input was rejected.
    pub error: Option<&'static str>,
}

impl Transition {
    fn to(next: Screen) -> Self {
        Self { next, error: None }
    }

    fn reject(screen: Screen, choice: Choice) -> Self {
        let error = match choice {
            Choice::OutOfRange => "Invalid choice.",
            _ => "Invalid input.",
        };
        Self {
            next: screen,
            error: Some(error),
        }
    }
}

/// Compute the next screen for `input` on `screen`.
///
/// `TestPrompt` always returns to its section menu; the outcome itself is
/// applied separately by the executor.
pub fn transition(screen: Screen, input: &str, session: &Session) -> Transition {
    match screen {
        Screen::MainMenu => match parse_choice(input, session.len()) {
            Choice::Back => Transition::to(Screen::Exit),
            Choice::Select(n) => Transition::to(Screen::SectionMenu { section: n - 1 }),
            choice => Transition::reject(screen, choice),
        },
        Screen::SectionMenu { section } => {
            let max = session.section(section).map_or(0, |s| s.items.len());
            match parse_choice(input, max) {
                Choice::Back => Transition::to(Screen::MainMenu),
                Choice::Select(n) => Transition::to(Screen::TestPrompt {
                    section,
                    item: n - 1,
                }),
                choice => Transition::reject(screen, choice),
            }
        }
        Screen::TestPrompt { section, .. } => Transition::to(Screen::SectionMenu { section }),
        Screen::Exit => Transition::to(Screen::Exit),
    }
}

/// Map a test-result code (`1`-`4`) to a status.
pub fn parse_outcome(input: &str) -> Option<Status> {
    match input.trim() {
        "1" => Some(Status::Pass),
        "2" => Some(Status::Fail),
        "3" => Some(Status::Warning),
        "4" => Some(Status::NotTested),
        _ => None,
    }
}

/// Record `status` on `item`.
///
/// Fail and Warning always store a note (empty when none was given),
/// replacing any earlier one. Pass and Not Tested leave notes untouched.
pub fn apply_outcome(item: &mut TestItem, status: Status, note: Option<String>) {
    item.status = status;
    if status.requires_notes() {
        item.notes = Some(note.unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{section, smoke_session};

    #[test]
    fn parse_choice_classifies_input() {
        assert_eq!(parse_choice("0", 3), Choice::Back);
        assert_eq!(parse_choice(" 2 \n", 3), Choice::Select(2));
        assert_eq!(parse_choice("4", 3), Choice::OutOfRange);
        assert_eq!(parse_choice("-1", 3), Choice::OutOfRange);
        assert_eq!(parse_choice("99999999999999999999999", 3), Choice::OutOfRange);
        assert_eq!(parse_choice("abc", 3), Choice::Invalid);
        assert_eq!(parse_choice("", 3), Choice::Invalid);
    }

    #[test]
    fn main_menu_selects_section_or_exits() {
        let session = smoke_session();
        let step = transition(Screen::MainMenu, "1", &session);
        assert_eq!(step.next, Screen::SectionMenu { section: 0 });
        assert_eq!(step.error, None);
        assert_eq!(transition(Screen::MainMenu, "0", &session).next, Screen::Exit);
    }

    #[test]
    fn invalid_main_menu_input_stays_put() {
        let session = smoke_session();
        let before = session.clone();
        let step = transition(Screen::MainMenu, "abc", &session);
        assert_eq!(step.next, Screen::MainMenu);
        assert_eq!(step.error, Some("Invalid input."));
        let step = transition(Screen::MainMenu, "7", &session);
        assert_eq!(step.next, Screen::MainMenu);
        assert_eq!(step.error, Some("Invalid choice."));
        assert_eq!(session, before);
    }

    #[test]
    fn section_menu_selects_item_or_goes_back() {
        let session = smoke_session();
        let screen = Screen::SectionMenu { section: 0 };
        assert_eq!(
            transition(screen, "2", &session).next,
            Screen::TestPrompt {
                section: 0,
                item: 1
            }
        );
        assert_eq!(transition(screen, "0", &session).next, Screen::MainMenu);
        assert_eq!(transition(screen, "3", &session).next, screen);
    }

    #[test]
    fn empty_section_only_accepts_back() {
        let session = Session::from_sections(vec![section("1. Empty", &[])]);
        let screen = Screen::SectionMenu { section: 0 };
        assert_eq!(transition(screen, "1", &session).next, screen);
        assert_eq!(transition(screen, "0", &session).next, Screen::MainMenu);
    }

    #[test]
    fn test_prompt_returns_to_section() {
        let session = smoke_session();
        let screen = Screen::TestPrompt {
            section: 0,
            item: 1,
        };
        assert_eq!(
            transition(screen, "anything", &session).next,
            Screen::SectionMenu { section: 0 }
        );
    }

    #[test]
    fn parse_outcome_maps_codes() {
        assert_eq!(parse_outcome("1"), Some(Status::Pass));
        assert_eq!(parse_outcome("2"), Some(Status::Fail));
        assert_eq!(parse_outcome("3"), Some(Status::Warning));
        assert_eq!(parse_outcome("4"), Some(Status::NotTested));
        assert_eq!(parse_outcome("5"), None);
        assert_eq!(parse_outcome("pass"), None);
    }

    #[test]
    fn pass_and_not_tested_keep_existing_notes() {
        let mut item = TestItem::new("t", "d");
        apply_outcome(&mut item, Status::Pass, Some("ignored".to_string()));
        assert_eq!(item.status, Status::Pass);
        assert_eq!(item.notes, None);

        item.notes = Some("earlier".to_string());
        apply_outcome(&mut item, Status::NotTested, None);
        assert_eq!(item.status, Status::NotTested);
        assert_eq!(item.notes.as_deref(), Some("earlier"));
    }

    #[test]
    fn fail_and_warning_always_capture_notes() {
        let mut item = TestItem::new("t", "d");
        apply_outcome(&mut item, Status::Fail, None);
        assert_eq!(item.notes.as_deref(), Some(""));

        apply_outcome(&mut item, Status::Warning, Some("slow".to_string()));
        assert_eq!(item.status, Status::Warning);
        assert_eq!(item.notes.as_deref(), Some("slow"));
    }
}
