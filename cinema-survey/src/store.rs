use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{Answers, PersistenceError, StoredRecord, SurveyRecord};

/// A remote collection that completed surveys are written to.
///
/// Implementations perform exactly one request per call and never retry.
/// A failed `create` must leave nothing behind in the store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create one record and return it with its server-assigned id.
    async fn create(&self, record: &SurveyRecord) -> Result<StoredRecord, PersistenceError>;

    /// Read every stored record, in the order the store returns them.
    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, PersistenceError>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn create(&self, record: &SurveyRecord) -> Result<StoredRecord, PersistenceError> {
        (**self).create(record).await
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, PersistenceError> {
        (**self).fetch_all().await
    }
}

/// Persist a completed survey.
///
/// Flattens `answers` into a [`SurveyRecord`] stamped with the current time
/// and issues a single `create` call.
pub async fn save<S: RecordStore + ?Sized>(
    store: &S,
    answers: &Answers,
) -> Result<StoredRecord, PersistenceError> {
    let record = SurveyRecord::from_answers(answers, Utc::now());
    match store.create(&record).await {
        Ok(stored) => {
            tracing::info!(id = %stored.id, "Survey response saved");
            Ok(stored)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to save survey response");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::MemoryStore;
    use crate::movie_night::{EMAIL, MOVIE_TYPE};

    #[tokio::test]
    async fn save_creates_exactly_one_record() {
        let store = MemoryStore::new();
        let answers: Answers = [(MOVIE_TYPE, "action"), (EMAIL, "x@y.z")]
            .into_iter()
            .collect();

        let stored = save(&store, &answers).await.unwrap();

        assert_eq!(store.create_calls(), 1);
        assert_eq!(store.records(), vec![stored.clone()]);
        assert_eq!(stored.record.movie_type, "action");
        assert!(DateTime::parse_from_rfc3339(&stored.record.completed_at).is_ok());
        assert!(stored.record.completed_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn failed_save_creates_nothing() {
        let store = MemoryStore::new().failing(1);

        let err = save(&store, &Answers::new()).await.unwrap_err();

        assert!(matches!(err, PersistenceError::Unavailable(_)));
        assert_eq!(store.create_calls(), 1);
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn shared_store_delegates() {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn RecordStore> = store.clone();

        save(&shared, &Answers::new()).await.unwrap();

        assert_eq!(shared.fetch_all().await.unwrap().len(), 1);
        assert_eq!(store.create_calls(), 1);
    }
}
