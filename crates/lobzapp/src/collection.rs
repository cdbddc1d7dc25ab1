//! # Record Collection
//!
//! The ordered list of records being edited in one session. Insertion order is the
//! order shown to the user, duplicates are allowed, and positions are always the dense
//! range `0..size()`: every operation either completes fully or leaves the collection
//! exactly as it was.
//!
//! ## Mutation
//!
//! - [`RecordCollection::add`] / [`RecordCollection::add_value`]: append one record.
//! - [`RecordCollection::remove`]: delete one record, later records shift down.
//! - [`RecordCollection::import_records`]: append a batch, all or nothing.
//! - [`RecordCollection::reconcile_order`]: the only bulk reorder entry point.
//!
//! ## Reconciling a Display Order
//!
//! After a drag-reorder the UI reports, for each new position, the old index of the
//! record shown there. Records the display did not mention (added after the order was
//! captured) keep their relative order and go after the reconciled prefix:
//!
//! ```text
//! old:    [A, B, C, D]
//! order:  [2, 0, 1]
//! result: [C, A, B, D]
//! ```

use crate::code::Code;
use crate::error::{LobzError, Result};
use crate::model::{ObjectiveRecord, RawObjective};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<ObjectiveRecord>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ObjectiveRecord> {
        self.records
            .get(index)
            .ok_or_else(|| LobzError::out_of_range(index, self.records.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectiveRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ObjectiveRecord] {
        &self.records
    }

    /// Appends a record and returns its index.
    pub fn add(&mut self, record: ObjectiveRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Appends a record given in plain-data form.
    pub fn add_value(&mut self, value: &Value) -> Result<usize> {
        let record = ObjectiveRecord::from_value(value)?;
        Ok(self.add(record))
    }

    /// Removes the record at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<ObjectiveRecord> {
        if index >= self.records.len() {
            return Err(LobzError::out_of_range(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    /// Appends every entry in input order, or none of them if any entry is invalid.
    ///
    /// Returns the number of records added.
    pub fn import_records(&mut self, entries: &[Value]) -> Result<usize> {
        let batch = entries
            .iter()
            .map(ObjectiveRecord::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(self.extend_all(batch))
    }

    /// Typed variant of [`RecordCollection::import_records`].
    pub fn import_raw(&mut self, entries: Vec<RawObjective>) -> Result<usize> {
        let batch = entries
            .into_iter()
            .map(ObjectiveRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(self.extend_all(batch))
    }

    fn extend_all(&mut self, batch: Vec<ObjectiveRecord>) -> usize {
        let count = batch.len();
        self.records.extend(batch);
        count
    }

    /// Plain-data form of every record, in the current order.
    pub fn export_records(&self) -> Vec<RawObjective> {
        self.records.iter().map(ObjectiveRecord::to_raw).collect()
    }

    /// Rewrites the order so that `display_order[new_pos]` names the old index of the
    /// record now at `new_pos`. Unmentioned records follow in their original order.
    ///
    /// Fails without touching the collection if an entry is out of range or repeated.
    pub fn reconcile_order(&mut self, display_order: &[usize]) -> Result<()> {
        let len = self.records.len();
        let mut seen = vec![false; len];
        for &old in display_order {
            if old >= len {
                return Err(LobzError::out_of_range(old, len));
            }
            if seen[old] {
                return Err(LobzError::InvalidOrder(format!(
                    "index {} appears more than once",
                    old
                )));
            }
            seen[old] = true;
        }

        let mut slots: Vec<Option<ObjectiveRecord>> =
            std::mem::take(&mut self.records).into_iter().map(Some).collect();
        let mut reordered = Vec::with_capacity(len);
        for &old in display_order {
            reordered.extend(slots[old].take());
        }
        reordered.extend(slots.into_iter().flatten());

        self.records = reordered;
        Ok(())
    }

    /// Unique outcome codes used by any record, sorted numerically.
    ///
    /// Codes that differ only in spelling (`"7"`, `"07"`) count once; the first
    /// spelling seen is kept.
    pub fn outcome_ids(&self) -> Vec<Code> {
        let mut seen = HashSet::new();
        let mut ids: Vec<Code> = self
            .records
            .iter()
            .flat_map(|r| r.outcome_ids())
            .filter(|id| seen.insert(id.value()))
            .cloned()
            .collect();
        ids.sort_by_key(Code::value);
        ids
    }
}

impl From<Vec<ObjectiveRecord>> for RecordCollection {
    fn from(records: Vec<ObjectiveRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a ObjectiveRecord;
    type IntoIter = std::slice::Iter<'a, ObjectiveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
