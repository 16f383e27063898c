use crate::client::AsyncFirestoreClient;
use crate::error::StoreResult;
use crate::models::Dress;
use crate::repositories::traits::DressRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Dress repository backed by a Firestore collection.
///
/// This repository delegates storage access to the AsyncFirestoreClient and
/// turns raw documents into typed dresses. Documents that do not look like
/// dresses are skipped with a warning rather than failing the whole catalog.
pub struct FirestoreDressRepository {
    client: Arc<dyn AsyncFirestoreClient>,
    collection: String,
}

impl FirestoreDressRepository {
    /// Create a new FirestoreDressRepository reading the given collection.
    pub fn new(client: Arc<dyn AsyncFirestoreClient>, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl DressRepository for FirestoreDressRepository {
    async fn list_all(&self) -> StoreResult<Vec<Dress>> {
        let documents = self.client.list_documents(&self.collection).await?;

        let mut dresses = Vec::with_capacity(documents.len());
        for document in documents {
            let fields = document.to_json()?;
            match serde_json::from_value::<Dress>(Value::Object(fields)) {
                Ok(dress) => dresses.push(dress),
                Err(e) => {
                    tracing::warn!(
                        "Skipping malformed catalog document {}: {}",
                        document.id(),
                        e
                    );
                }
            }
        }

        tracing::debug!("Loaded {} dresses from {}", dresses.len(), self.collection);
        Ok(dresses)
    }
}
