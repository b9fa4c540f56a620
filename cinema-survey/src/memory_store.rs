//! In-process record store for tests and dry runs.
//!
//! `MemoryStore` keeps created records in memory and can be told to fail a
//! number of upcoming `create` calls, which makes the submit-failure path
//! easy to exercise.
//!
//! # Example
//!
//! ```rust
//! use cinema_survey::{Answers, MemoryStore, save};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let store = MemoryStore::new().failing(1);
//!
//! assert!(save(&store, &Answers::new()).await.is_err());
//! assert!(save(&store, &Answers::new()).await.is_ok());
//! assert_eq!(store.records().len(), 1);
//! # });
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{PersistenceError, RecordStore, StoredRecord, SurveyRecord};

/// A record store that lives in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredRecord>>,
    failures_remaining: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` create calls fail.
    pub fn failing(self, count: usize) -> Self {
        self.fail_next(count);
        self
    }

    /// Make the next `count` create calls fail.
    pub fn fail_next(&self, count: usize) {
        self.failures_remaining.store(count, Ordering::SeqCst);
    }

    /// Snapshot of every record created so far.
    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().clone()
    }

    /// Number of create calls received, failed ones included.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, record: &SurveyRecord) -> Result<StoredRecord, PersistenceError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let should_fail = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(PersistenceError::Unavailable(
                "simulated store failure".to_string(),
            ));
        }

        let mut records = self.records.lock();
        let stored = StoredRecord {
            id: format!("mem{:012}", records.len() + 1),
            record: record.clone(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, PersistenceError> {
        Ok(self.records())
    }
}
