//! Ribbon dance vocabulary taxonomy
//!
//! The taxonomy is a fixed tree of ordered entries compiled into the binary.
//! It is organised in three layers:
//!
//! - **Layer 1** - deterministic vocabulary ([`Category`] sections)
//! - **Layer 2** - compositional rules ([`COMPOSITIONAL_RULES`])
//! - **Layer 3** - style variations ([`Style`])

mod data;
mod style;

use std::fmt;
use std::str::FromStr;

use crate::types::RibbonError;

pub use data::COMPOSITIONAL_RULES;
pub use style::{Style, StyleProfile, TechnicalFocus};

/// An ordered list of `(key, entry)` pairs
pub type Section = &'static [(&'static str, Entry)];

/// A node of the vocabulary tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Single descriptive value
    Text(&'static str),
    /// Ordered vocabulary terms
    List(&'static [&'static str]),
    /// Nested ordered mapping
    Map(Section),
}

impl Entry {
    /// Look up a child by key (maps only)
    pub fn get(&self, key: &str) -> Option<&'static Entry> {
        match *self {
            Entry::Map(entries) => entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Terms of a list entry, empty for anything else
    pub fn terms(&self) -> &'static [&'static str] {
        match *self {
            Entry::List(terms) => terms,
            _ => &[],
        }
    }

    /// Value of a text entry
    pub fn as_text(&self) -> Option<&'static str> {
        match *self {
            Entry::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Children of a map entry, empty for anything else
    pub fn entries(&self) -> Section {
        match *self {
            Entry::Map(entries) => entries,
            _ => &[],
        }
    }
}

/// Top-level taxonomy sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MovementPatterns,
    SpatialRelationships,
    TemporalDynamics,
    PhysicalProperties,
    CompositionalStructure,
}

impl Category {
    /// All sections in display order
    pub const ALL: [Category; 5] = [
        Category::MovementPatterns,
        Category::SpatialRelationships,
        Category::TemporalDynamics,
        Category::PhysicalProperties,
        Category::CompositionalStructure,
    ];

    /// Snake-case key of the section
    pub fn key(self) -> &'static str {
        match self {
            Category::MovementPatterns => "movement_patterns",
            Category::SpatialRelationships => "spatial_relationships",
            Category::TemporalDynamics => "temporal_dynamics",
            Category::PhysicalProperties => "physical_properties",
            Category::CompositionalStructure => "compositional_structure",
        }
    }

    /// Entries of the section
    pub fn section(self) -> Section {
        section(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s.trim())
            .ok_or_else(|| RibbonError::InvalidInput(format!("unknown taxonomy section: {s}")))
    }
}

/// Entries of a top-level section
pub fn section(category: Category) -> Section {
    match category {
        Category::MovementPatterns => data::MOVEMENT_PATTERNS,
        Category::SpatialRelationships => data::SPATIAL_RELATIONSHIPS,
        Category::TemporalDynamics => data::TEMPORAL_DYNAMICS,
        Category::PhysicalProperties => data::PHYSICAL_PROPERTIES,
        Category::CompositionalStructure => data::COMPOSITIONAL_STRUCTURE,
    }
}

/// Look up a category inside a section, e.g. `spirals` in movement patterns
pub fn lookup(category: Category, key: &str) -> Option<&'static Entry> {
    section(category)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
