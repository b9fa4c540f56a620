//! Listing stored responses for administrators.

use crate::{PersistenceError, RECORD_FIELDS, RecordStore, StoredRecord};

/// Fetch every stored response.
pub async fn list_responses<S: RecordStore + ?Sized>(
    store: &S,
) -> Result<Vec<StoredRecord>, PersistenceError> {
    let records = store.fetch_all().await?;
    tracing::info!(count = records.len(), "Fetched survey responses");
    Ok(records)
}

/// Render records as tab-separated rows with a header line.
///
/// Columns are the record id followed by every schema field in order.
pub fn render_table(records: &[StoredRecord]) -> String {
    let mut out = String::from("id");
    for field in RECORD_FIELDS {
        out.push('\t');
        out.push_str(field);
    }
    out.push('\n');

    for stored in records {
        out.push_str(&stored.id);
        for value in stored.record.values() {
            out.push('\t');
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}
