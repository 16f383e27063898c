//! HTTP client for the Firestore REST API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles API key
//! authentication, error mapping, pagination, and the typed value encoding
//! Firestore documents travel in.

mod async_wrapper;
pub mod values;

pub use async_wrapper::{AsyncFirestoreClient, AsyncFirestoreClientImpl};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Page size for document listing.
///
/// The catalog is a few hundred documents at most, so one page usually
/// covers it; the pagination loop exists for the day it does not.
const LIST_PAGE_SIZE: usize = 300;

/// A document as returned by the Firestore REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreDocument {
    /// Fully qualified resource name, ending in the document id
    pub name: String,

    /// Typed field values; absent for empty documents
    #[serde(default)]
    pub fields: Value,
}

impl FirestoreDocument {
    /// The bare document id (the last segment of the resource name).
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Decode the typed fields into a plain JSON object.
    pub fn to_json(&self) -> StoreResult<Map<String, Value>> {
        if self.fields.is_null() {
            return Ok(Map::new());
        }
        values::decode_fields(&self.fields)
    }
}

/// Response wrapper for the document list endpoint.
#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    /// Documents on this page; omitted entirely for an empty collection
    #[serde(default)]
    documents: Vec<FirestoreDocument>,

    /// Opaque cursor for the next page, when there is one
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// HTTP client for the Firestore REST API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct FirestoreClient {
    /// Firestore REST base URL
    base_url: String,

    /// Google Cloud project id
    project_id: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl FirestoreClient {
    /// Create a new FirestoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.firestore_base_url.clone(),
            project_id: config.firestore_project_id.clone(),
            api_key: config.firestore_api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a FirestoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, project_id: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            project_id,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Path to a collection under the project's default database.
    fn collection_path(&self, collection: &str) -> String {
        format!(
            "/projects/{}/databases/(default)/documents/{}",
            self.project_id, collection
        )
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);

        self.agent
            .get(&url)
            .query("key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .query("key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
            }
        }

        result
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    // Key auth failures surface as 401 or 403 depending on
                    // whether the key is absent or restricted
                    401 | 403 => StoreError::Unauthorized,
                    404 => StoreError::NotFound(message),
                    429 => StoreError::RateLimitExceeded,
                    _ => StoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= Document Operations =========================

    /// Get every document in a collection, following pagination.
    pub fn list_documents(&self, collection: &str) -> StoreResult<Vec<FirestoreDocument>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut path = format!(
                "{}?pageSize={}",
                self.collection_path(collection),
                LIST_PAGE_SIZE
            );
            if let Some(token) = &page_token {
                path.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
            }

            let response = self.get(&path)?;
            let body = response
                .into_string()
                .map_err(|e| StoreError::HttpError(e.to_string()))?;

            let page: ListDocumentsResponse =
                serde_json::from_str(&body).map_err(StoreError::JsonError)?;

            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!("Listed {} documents from {}", documents.len(), collection);
        Ok(documents)
    }

    /// Create a document in a collection with a store-assigned id.
    ///
    /// Takes plain JSON fields and handles the typed encoding internally;
    /// returns the stored document, whose name carries the new id.
    pub fn create_document(
        &self,
        collection: &str,
        fields: &Map<String, Value>,
    ) -> StoreResult<FirestoreDocument> {
        let path = self.collection_path(collection);
        let body = json!({ "fields": values::encode_fields(fields) });

        let response = self.post(&path, &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| StoreError::HttpError(e.to_string()))?;

        let document: FirestoreDocument =
            serde_json::from_str(&response_body).map_err(StoreError::JsonError)?;

        tracing::info!("Created document {} in {}", document.id(), collection);
        Ok(document)
    }
}
