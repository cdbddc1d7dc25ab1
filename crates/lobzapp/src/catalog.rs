//! # Catalog Index
//!
//! The catalog is the fixed vocabulary records are composed from: learning levels,
//! each with its own verb list, and a flat list of accreditation (ABET) outcomes.
//! It is built once from trusted data and is read-only afterwards.
//!
//! ## Input Shape
//!
//! ```text
//! {
//!   "levels": { "1": { "display_name": "Remember", "verbs": { "0": "define", ... } }, ... },
//!   "ABET":   { "0": "an ability to ...", ... }
//! }
//! ```
//!
//! Both `verbs` and `ABET` may also be plain lists, where the list position is the id.
//!
//! ## Lookup
//!
//! Ids are keyed by their numeric value, so `"1"` and `"01"` resolve to the same level.
//! Every lookup that misses fails with [`LobzError::NotFound`]; there is no fallback.

use crate::code::parse_code;
use crate::error::{LobzError, RefKind, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Either an id-keyed map or an ordered list of labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdTable {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl Default for IdTable {
    fn default() -> Self {
        IdTable::List(Vec::new())
    }
}

impl IdTable {
    fn into_indexed(self, what: &str) -> Result<BTreeMap<u32, String>> {
        match self {
            IdTable::List(items) => Ok(items
                .into_iter()
                .enumerate()
                .map(|(i, label)| (i as u32, label))
                .collect()),
            IdTable::Map(items) => {
                let mut indexed = BTreeMap::new();
                for (key, label) in items {
                    let id = parse_code(&key).ok_or_else(|| {
                        LobzError::Catalog(format!("{} id {:?} is not an integer", what, key))
                    })?;
                    if indexed.insert(id, label).is_some() {
                        return Err(LobzError::Catalog(format!(
                            "{} id {:?} is defined twice",
                            what, key
                        )));
                    }
                }
                Ok(indexed)
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelData {
    pub display_name: String,
    #[serde(default)]
    pub verbs: IdTable,
}

/// Raw catalog data as loaded from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogData {
    pub levels: BTreeMap<String, LevelData>,
    #[serde(rename = "ABET", default)]
    pub outcomes: IdTable,
}

/// One learning level and its verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    display_name: String,
    verbs: BTreeMap<u32, String>,
}

impl Level {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn verb(&self, verb_id: u32) -> Option<&str> {
        self.verbs.get(&verb_id).map(String::as_str)
    }

    /// Verb options in id order.
    pub fn verbs(&self) -> impl Iterator<Item = (u32, &str)> {
        self.verbs.iter().map(|(id, verb)| (*id, verb.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIndex {
    levels: BTreeMap<u32, Level>,
    outcomes: BTreeMap<u32, String>,
}

impl CatalogIndex {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::try_from(data)
    }

    /// Returns the level definition for `level_id`.
    pub fn get_level(&self, level_id: &str) -> Result<&Level> {
        parse_code(level_id)
            .and_then(|id| self.levels.get(&id))
            .ok_or_else(|| LobzError::not_found(RefKind::Level, level_id))
    }

    /// Resolves `level_id` and returns the verb at `verb_id` within it.
    pub fn get_verb(&self, level_id: &str, verb_id: &str) -> Result<&str> {
        let level = self.get_level(level_id)?;
        parse_code(verb_id)
            .and_then(|id| level.verb(id))
            .ok_or_else(|| LobzError::not_found(RefKind::Verb, verb_id))
    }

    pub fn get_outcome(&self, outcome_id: &str) -> Result<&str> {
        parse_code(outcome_id)
            .and_then(|id| self.outcomes.get(&id))
            .map(String::as_str)
            .ok_or_else(|| LobzError::not_found(RefKind::Outcome, outcome_id))
    }

    /// Level options in id order.
    pub fn levels(&self) -> impl Iterator<Item = (u32, &Level)> {
        self.levels.iter().map(|(id, level)| (*id, level))
    }

    /// Verb options for one level, in id order.
    pub fn verbs(&self, level_id: &str) -> Result<Vec<(u32, &str)>> {
        Ok(self.get_level(level_id)?.verbs().collect())
    }

    /// Outcome options in id order.
    pub fn outcomes(&self) -> impl Iterator<Item = (u32, &str)> {
        self.outcomes.iter().map(|(id, label)| (*id, label.as_str()))
    }
}

impl TryFrom<CatalogData> for CatalogIndex {
    type Error = LobzError;

    fn try_from(data: CatalogData) -> Result<Self> {
        let mut levels = BTreeMap::new();
        for (key, level) in data.levels {
            let id = parse_code(&key)
                .ok_or_else(|| LobzError::Catalog(format!("level id {:?} is not an integer", key)))?;
            let verbs = level.verbs.into_indexed("verb")?;
            let duplicate = levels.insert(
                id,
                Level {
                    display_name: level.display_name,
                    verbs,
                },
            );
            if duplicate.is_some() {
                return Err(LobzError::Catalog(format!("level id {:?} is defined twice", key)));
            }
        }

        Ok(Self {
            levels,
            outcomes: data.outcomes.into_indexed("outcome")?,
        })
    }
}
