//! # Listings
//!
//! A listing is everything a UI needs to draw the current collection: each record's
//! sentence paired with its current index, plus (in display mode) the outcomes the
//! collection covers. The index is the handle the UI hands back for delete and
//! reorder, and it is always the record's live dense position.
//!
//! Two modes, matching the read-only and editable views:
//!
//! - [`ListingMode::Display`]: sentences and the outcome summary.
//! - [`ListingMode::Edit`]: sentences only; the UI attaches delete/drag controls.

use crate::catalog::CatalogIndex;
use crate::code::Code;
use crate::collection::RecordCollection;
use crate::error::Result;
use serde::Serialize;

pub const DEFAULT_EMPTY_MESSAGE: &str = "There don't appear to be any Learning Objectives";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    #[default]
    Display,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedRecord {
    pub index: usize,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeEntry {
    pub id: Code,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub mode: ListingMode,
    pub entries: Vec<ListedRecord>,
    /// Set only when there are no entries.
    pub empty_message: Option<String>,
    pub outcomes: Vec<OutcomeEntry>,
}

/// Renders every record, pairing each sentence with its index.
pub fn index_records(
    collection: &RecordCollection,
    catalog: &CatalogIndex,
) -> Result<Vec<ListedRecord>> {
    collection
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Ok(ListedRecord {
                index,
                sentence: record.render(catalog)?,
            })
        })
        .collect()
}

/// The unique outcomes used across the collection, with their catalog labels.
pub fn outcome_summary(
    collection: &RecordCollection,
    catalog: &CatalogIndex,
) -> Result<Vec<OutcomeEntry>> {
    collection
        .outcome_ids()
        .into_iter()
        .map(|id| {
            let label = catalog.get_outcome(id.as_str())?.to_string();
            Ok(OutcomeEntry { id, label })
        })
        .collect()
}

pub fn build_listing(
    collection: &RecordCollection,
    catalog: &CatalogIndex,
    mode: ListingMode,
    empty_message: &str,
) -> Result<Listing> {
    let entries = index_records(collection, catalog)?;
    let outcomes = match mode {
        ListingMode::Display => outcome_summary(collection, catalog)?,
        ListingMode::Edit => Vec::new(),
    };
    let empty_message = entries.is_empty().then(|| empty_message.to_string());

    Ok(Listing {
        mode,
        entries,
        empty_message,
        outcomes,
    })
}
