//! Async wrapper around the synchronous FirestoreClient.
//!
//! This module provides an async interface to the synchronous FirestoreClient
//! by using `tokio::task::spawn_blocking` to run HTTP operations on a
//! dedicated thread pool, preventing blocking of the async runtime.

use crate::client::{FirestoreClient, FirestoreDocument};
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Async document-store operations.
///
/// This trait provides async versions of the FirestoreClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid blocking the
/// async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncFirestoreClient: Send + Sync {
    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<FirestoreDocument>>;

    async fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<FirestoreDocument>;
}

/// Async wrapper around the synchronous FirestoreClient.
#[derive(Clone)]
pub struct AsyncFirestoreClientImpl {
    client: Arc<FirestoreClient>,
}

impl AsyncFirestoreClientImpl {
    pub fn new(client: FirestoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncFirestoreClient for AsyncFirestoreClientImpl {
    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<FirestoreDocument>> {
        let client = self.client.clone();
        let collection = collection.to_string();

        tokio::task::spawn_blocking(move || client.list_documents(&collection))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<FirestoreDocument> {
        let client = self.client.clone();
        let collection = collection.to_string();

        tokio::task::spawn_blocking(move || client.create_document(&collection, &fields))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }
}
