//! Markdown checklist parsing.
//!
//! A checklist contains numbered level-2 headings (`## 2. Navigation`) and
//! pipe tables whose header starts with `| Test | Description |`. Actionable
//! rows begin their first cell with an unchecked box (`☐`). Anything else is
//! ignored without error.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::types::{Section, TestItem};

const UNCHECKED_BOX: char = '☐';

static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## (\d+\.\s.+?)\s*$").expect("section heading regex"));
static TABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*Test\s*\|\s*Description\s*\|").expect("table header regex"));
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*:?-{3,}:?\s*\|\s*:?-{3,}:?\s*\|").expect("table separator regex")
});

/// How discovered tables are assigned to discovered sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    /// Each table belongs to the nearest numbered heading above it.
    #[default]
    Structural,
    /// The Nth table belongs to the Nth heading, regardless of position.
    Positional,
}

impl FromStr for PairingMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "structural" => Ok(PairingMode::Structural),
            "positional" => Ok(PairingMode::Positional),
            other => Err(format!(
                "unknown pairing mode '{other}' (expected 'structural' or 'positional')"
            )),
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingMode::Structural => f.write_str("structural"),
            PairingMode::Positional => f.write_str("positional"),
        }
    }
}

/// Parser output: sections in document order plus what could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChecklist {
    pub sections: Vec<Section>,
    /// Tables with test rows that no section received.
    pub dropped_tables: usize,
}

impl ParsedChecklist {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heading {
    line: usize,
    title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Table {
    line: usize,
    items: Vec<TestItem>,
}

/// Parse checklist text into sections of untested items.
pub fn parse_checklist(content: &str, mode: PairingMode) -> ParsedChecklist {
    let headings = find_headings(content);
    let tables = find_tables(content);
    match mode {
        PairingMode::Structural => pair_structural(headings, tables),
        PairingMode::Positional => pair_positional(headings, tables),
    }
}

fn find_headings(content: &str) -> Vec<Heading> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line, text)| {
            SECTION_HEADING.captures(text).map(|caps| Heading {
                line,
                title: caps[1].to_string(),
            })
        })
        .collect()
}

/// Find every test table. Tables without a single actionable row are
/// discarded here, before any pairing happens.
fn find_tables(content: &str) -> Vec<Table> {
    let lines: Vec<&str> = content.lines().collect();
    let mut tables = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let is_table_start = TABLE_HEADER.is_match(lines[index])
            && lines
                .get(index + 1)
                .is_some_and(|next| TABLE_SEPARATOR.is_match(next));
        if !is_table_start {
            index += 1;
            continue;
        }

        let start = index;
        index += 2;
        let mut items = Vec::new();
        while let Some(row) = lines.get(index).filter(|row| row.starts_with('|')) {
            if let Some(item) = parse_row(row) {
                items.push(item);
            }
            index += 1;
        }
        if !items.is_empty() {
            tables.push(Table { line: start, items });
        }
    }
    tables
}

/// Extract a test item from a table row, or `None` when the row is not an
/// unchecked test.
fn parse_row(row: &str) -> Option<TestItem> {
    let cells: Vec<&str> = row.trim_end().split('|').map(str::trim).collect();
    if cells.len() < 4 {
        return None;
    }
    let cells = &cells[1..cells.len() - 1];
    let name = cells[0].strip_prefix(UNCHECKED_BOX)?.trim();
    Some(TestItem::new(name, cells[1]))
}

fn pair_structural(headings: Vec<Heading>, tables: Vec<Table>) -> ParsedChecklist {
    let mut sections: Vec<Section> = headings
        .iter()
        .map(|heading| Section::new(heading.title.clone()))
        .collect();
    let mut dropped_tables = 0;
    for table in tables {
        let owner = headings
            .iter()
            .rposition(|heading| heading.line < table.line);
        match owner {
            Some(position) => sections[position].items.extend(table.items),
            None => dropped_tables += 1,
        }
    }
    ParsedChecklist {
        sections,
        dropped_tables,
    }
}

fn pair_positional(headings: Vec<Heading>, tables: Vec<Table>) -> ParsedChecklist {
    let dropped_tables = tables.len().saturating_sub(headings.len());
    let mut tables = tables.into_iter();
    let sections = headings
        .into_iter()
        .map(|heading| Section {
            title: heading.title,
            items: tables.next().map(|table| table.items).unwrap_or_default(),
        })
        .collect();
    ParsedChecklist {
        sections,
        dropped_tables,
    }
}
