//! Session-scoped record storage.

use pdm_model::{Record, RecordId, RecordIdSequence};

use crate::error::{Result, StoreError};
use crate::search::filter_records;

/// Ordered, append-only collection of records for one session.
///
/// The store also owns the session's id sequence so ids stay unique across
/// every file imported into it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    ids: RecordIdSequence,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id sequence to draw new record ids from.
    pub fn ids_mut(&mut self) -> &mut RecordIdSequence {
        &mut self.ids
    }

    /// Appends `records` in order without assigning ids.
    ///
    /// The whole batch is rejected if any id is not greater than the one
    /// before it, so a failed append leaves the store unchanged.
    pub fn append(&mut self, records: Vec<Record>) -> Result<usize> {
        let mut last = self.last_id();
        for record in &records {
            if let Some(previous) = last
                && record.id <= previous
            {
                return Err(StoreError::IdNotIncreasing {
                    id: record.id,
                    last: previous,
                });
            }
            last = Some(record.id);
        }
        let added = records.len();
        self.records.extend(records);
        tracing::debug!(added, total = self.records.len(), "appended records");
        Ok(added)
    }

    /// Every stored record in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|index| &self.records[index])
    }

    /// Records whose name, company, email or phone contains `term`.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        filter_records(&self.records, term)
    }

    pub fn last_id(&self) -> Option<RecordId> {
        self.records.last().map(|record| record.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> Record {
        Record::new(RecordId::new(id))
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(vec![record(1), record(2)]).unwrap(), 2);
        assert_eq!(store.append(vec![record(5)]).unwrap(), 1);
        let ids: Vec<u64> = store.all().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 5]);
        assert!(store.get(RecordId::new(5)).is_some());
        assert!(store.get(RecordId::new(3)).is_none());
    }

    #[test]
    fn rejects_reused_ids_atomically() {
        let mut store = RecordStore::new();
        store.append(vec![record(1), record(2)]).unwrap();
        let err = store.append(vec![record(3), record(2)]).unwrap_err();
        assert!(matches!(err, StoreError::IdNotIncreasing { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_append_is_a_no_op() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(Vec::new()).unwrap(), 0);
        assert!(store.is_empty());
        assert_eq!(store.last_id(), None);
    }
}
