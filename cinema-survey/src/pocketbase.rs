//! Record store backed by a PocketBase collection over its REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{PersistenceError, RecordStore, StoreConfig, StoredRecord, SurveyRecord};

/// Records requested per page when reading the whole collection.
const PAGE_SIZE: usize = 500;

/// A PocketBase collection reached over HTTP.
#[derive(Debug, Clone)]
pub struct PocketBaseStore {
    client: Client,
    records_url: String,
}

/// One page of `GET /records`.
#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(rename = "perPage")]
    per_page: usize,
    items: Vec<StoredRecord>,
}

/// Error body PocketBase sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl PocketBaseStore {
    /// Create a client for the collection described by `config`.
    pub fn new(config: &StoreConfig) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            records_url: config.records_url(),
        })
    }

    /// The records endpoint this store talks to.
    pub fn records_url(&self) -> &str {
        &self.records_url
    }
}

#[async_trait]
impl RecordStore for PocketBaseStore {
    async fn create(&self, record: &SurveyRecord) -> Result<StoredRecord, PersistenceError> {
        tracing::debug!(url = %self.records_url, "Creating record");
        let response = self
            .client
            .post(&self.records_url)
            .json(record)
            .send()
            .await?;
        let body = ensure_success(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRecord>, PersistenceError> {
        let mut records = Vec::new();
        let mut page = 1usize;
        loop {
            tracing::debug!(url = %self.records_url, page, "Fetching records");
            let response = self
                .client
                .get(&self.records_url)
                .query(&[
                    ("page", page.to_string()),
                    ("perPage", PAGE_SIZE.to_string()),
                    ("skipTotal", "1".to_string()),
                ])
                .send()
                .await?;
            let body = ensure_success(response).await?.bytes().await?;
            let list: ListPage = serde_json::from_slice(&body)?;

            let done = list.items.len() < list.per_page || list.items.is_empty();
            records.extend(list.items);
            if done {
                break;
            }
            page += 1;
        }
        Ok(records)
    }
}

async fn ensure_success(response: Response) -> Result<Response, PersistenceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    Err(PersistenceError::rejected(status.as_u16(), message))
}
