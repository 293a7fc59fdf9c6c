//! Session state: every section and its items for the lifetime of one run.
//!
//! Structure is fixed once built. Only item `status` and `notes` change, and
//! only through [`Session::item_mut`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::core::types::{Section, TestItem};

/// Ordered mapping from section title to its test items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    sections: Vec<Section>,
}

impl Session {
    /// Build a session from parsed sections, keeping document order.
    ///
    /// A repeated title keeps the first position; the later section's items
    /// are appended after the earlier ones, so no parsed item is lost.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let mut merged: Vec<Section> = Vec::with_capacity(sections.len());
        for section in sections {
            match merged
                .iter_mut()
                .find(|existing| existing.title == section.title)
            {
                Some(existing) => {
                    warn!(title = %section.title, "duplicate section title, merging items");
                    existing.items.extend(section.items);
                }
                None => merged.push(section),
            }
        }
        Self { sections: merged }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn item(&self, section: usize, item: usize) -> Option<&TestItem> {
        self.sections.get(section)?.items.get(item)
    }

    pub fn item_mut(&mut self, section: usize, item: usize) -> Option<&mut TestItem> {
        self.sections.get_mut(section)?.items.get_mut(item)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}

impl Serialize for Session {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.title, &section.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SessionVisitor)
    }
}

struct SessionVisitor;

impl<'de> Visitor<'de> for SessionVisitor {
    type Value = Session;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section title to test items")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Session, A::Error> {
        let mut sections = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((title, items)) = access.next_entry::<String, Vec<TestItem>>()? {
            sections.push(Section { title, items });
        }
        Ok(Session::from_sections(sections))
    }
}
