//! # API Facade
//!
//! The API layer is a **thin facade** over the catalog and the record collection. It
//! is the single entry point a UI adapter (the CLI, a web front end) talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to catalog lookups and collection operations
//! - **Normalizes inputs** (positions arrive as strings and are parsed numerically)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no stdout/stderr output and no file I/O. Reading and writing the records
//! file is the caller's business.
//!
//! ## Positions From the UI
//!
//! Record positions come back from the UI as strings (`"2"`). They are parsed before
//! anything is touched, so `"2"` and position `2` always agree, and an unparseable
//! position is an [`LobzError::IndexOutOfRange`] that leaves the collection alone.

use crate::catalog::CatalogIndex;
use crate::code::parse_position;
use crate::collection::RecordCollection;
use crate::error::{LobzError, Result};
use crate::listing::{build_listing, outcome_summary, Listing, ListingMode, OutcomeEntry};
use crate::model::RawObjective;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Positions of records added or moved by the command, after it ran.
    pub affected: Vec<usize>,
    pub listing: Option<Listing>,
    pub exported: Vec<RawObjective>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, affected: Vec<usize>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_exported(mut self, exported: Vec<RawObjective>) -> Self {
        self.exported = exported;
        self
    }
}

/// The main API facade for one editing session.
pub struct LobzApi {
    catalog: CatalogIndex,
    collection: RecordCollection,
}

impl LobzApi {
    pub fn new(catalog: CatalogIndex) -> Self {
        Self::with_collection(catalog, RecordCollection::new())
    }

    pub fn with_collection(catalog: CatalogIndex, collection: RecordCollection) -> Self {
        Self {
            catalog,
            collection,
        }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    pub fn add_record(&mut self, value: &Value) -> Result<CmdResult> {
        let index = self.collection.add_value(value)?;
        debug!(index, size = self.collection.size(), "added record");

        let mut result = CmdResult::default().with_affected(vec![index]);
        result.add_message(CmdMessage::success(format!("Objective added ({})", index)));
        Ok(result)
    }

    pub fn remove_record(&mut self, index: &str) -> Result<CmdResult> {
        let position = parse_position(index)
            .ok_or_else(|| LobzError::out_of_range(format!("{:?}", index), self.collection.size()))?;
        let removed = self.collection.remove(position)?;
        debug!(position, size = self.collection.size(), "removed record");

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Objective removed ({}): {}",
            position,
            removed.task()
        )));
        Ok(result)
    }

    pub fn import_records(&mut self, entries: &[Value]) -> Result<CmdResult> {
        let start = self.collection.size();
        let count = self.collection.import_records(entries)?;
        debug!(count, size = self.collection.size(), "imported records");

        let mut result = CmdResult::default().with_affected((start..start + count).collect());
        if count == 0 {
            result.add_message(CmdMessage::info("No objectives to import."));
        } else {
            result.add_message(CmdMessage::success(format!("Total imported: {}", count)));
        }
        Ok(result)
    }

    /// Imports a JSON document holding a list of records.
    pub fn import_json(&mut self, json: &str) -> Result<CmdResult> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(entries) => self.import_records(&entries),
            _ => Err(LobzError::Type {
                expected: "a list of records",
                found: "a single value",
            }),
        }
    }

    pub fn export_records(&self) -> CmdResult {
        CmdResult::default().with_exported(self.collection.export_records())
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(
            &self.collection.export_records(),
        )?)
    }

    /// Applies a display order given as old positions, one per new position.
    pub fn reorder_records<I: AsRef<str>>(&mut self, display_order: &[I]) -> Result<CmdResult> {
        let order = display_order
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                parse_position(raw).ok_or_else(|| {
                    LobzError::out_of_range(format!("{:?}", raw), self.collection.size())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.collection.reconcile_order(&order)?;
        debug!(?order, size = self.collection.size(), "reconciled display order");

        let mut result = CmdResult::default().with_affected((0..order.len()).collect());
        result.add_message(CmdMessage::success("Objectives reordered"));
        Ok(result)
    }

    pub fn list(&self, mode: ListingMode, empty_message: &str) -> Result<CmdResult> {
        let listing = build_listing(&self.collection, &self.catalog, mode, empty_message)?;
        Ok(CmdResult::default().with_listing(listing))
    }

    pub fn outcome_summary(&self) -> Result<Vec<OutcomeEntry>> {
        outcome_summary(&self.collection, &self.catalog)
    }
}
