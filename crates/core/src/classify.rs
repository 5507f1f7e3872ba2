// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request classification
//!
//! Decides which requests are left for a player to handle by hand. Rules are
//! an ordered table of case-sensitive substring and exact-name matches; the
//! first matching rule wins. Unmatched equipment phrasing falls through and
//! surfaces later as a failed order rather than disappearing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Description marker the colony puts on tool requests
pub const TOOL_CLASS_MARKER: &str = "Tool of class";

/// Equipment words that mark a request as needing manual material choice
pub const DEFAULT_EQUIPMENT_KEYWORDS: &[&str] = &[
    "Sword",
    "Bow",
    "Pickaxe",
    "Axe",
    "Shovel",
    "Hoe",
    "Shears",
    "Shield",
    "Helmet",
    "Chestplate",
    "Leggings",
    "Boots",
    "Fishing Rod",
];

/// Generic request names that never map cleanly onto one item
pub const DEFAULT_SKIP_NAMES: &[&str] = &[
    "Food",
    "Fuel",
    "Crafter",
    "Compostable",
    "Fertilizer",
    "Flowers",
    "Smeltable Ore",
    "Stack List",
];

/// A single classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipRule {
    DescriptionContains(String),
    NameContainsAny(Vec<String>),
    NameEquals(BTreeSet<String>),
}

impl SkipRule {
    fn matches(&self, display_name: &str, description: &str) -> Option<SkipReason> {
        match self {
            SkipRule::DescriptionContains(marker) => description
                .contains(marker.as_str())
                .then_some(SkipReason::ToolClass),
            SkipRule::NameContainsAny(keywords) => keywords
                .iter()
                .find(|k| display_name.contains(k.as_str()))
                .map(|k| SkipReason::Equipment {
                    keyword: k.clone(),
                }),
            SkipRule::NameEquals(names) => names
                .contains(display_name)
                .then_some(SkipReason::ManualCategory),
        }
    }
}

/// Why a request was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkipReason {
    ToolClass,
    Equipment { keyword: String },
    ManualCategory,
    NoItem,
    NothingNeeded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ToolClass => write!(f, "tool request"),
            SkipReason::Equipment { keyword } => write!(f, "equipment ({})", keyword),
            SkipReason::ManualCategory => write!(f, "manual category"),
            SkipReason::NoItem => write!(f, "no item id"),
            SkipReason::NothingNeeded => write!(f, "nothing needed"),
        }
    }
}

/// Ordered rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<SkipRule>,
}

impl Classifier {
    /// Build the standard three-rule table from keyword and name lists
    pub fn new<K, N>(equipment_keywords: K, skip_names: N) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self::from_rules(vec![
            SkipRule::DescriptionContains(TOOL_CLASS_MARKER.to_string()),
            SkipRule::NameContainsAny(equipment_keywords.into_iter().map(Into::into).collect()),
            SkipRule::NameEquals(skip_names.into_iter().map(Into::into).collect()),
        ])
    }

    pub fn from_rules(rules: Vec<SkipRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SkipRule] {
        &self.rules
    }

    /// First matching rule's reason, or `None` when the request is automatable
    pub fn classify(&self, display_name: &str, description: &str) -> Option<SkipReason> {
        self.rules
            .iter()
            .find_map(|rule| rule.matches(display_name, description))
    }

    pub fn should_skip(&self, display_name: &str, description: &str) -> bool {
        self.classify(display_name, description).is_some()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_EQUIPMENT_KEYWORDS.iter().copied(),
            DEFAULT_SKIP_NAMES.iter().copied(),
        )
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
