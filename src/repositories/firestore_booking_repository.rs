use crate::client::AsyncFirestoreClient;
use crate::error::{StoreError, StoreResult};
use crate::models::Booking;
use crate::repositories::traits::BookingRepository;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Booking repository backed by a Firestore collection.
pub struct FirestoreBookingRepository {
    client: Arc<dyn AsyncFirestoreClient>,
    collection: String,
}

impl FirestoreBookingRepository {
    /// Create a new FirestoreBookingRepository writing to the given collection.
    pub fn new(client: Arc<dyn AsyncFirestoreClient>, collection: impl Into<String>) -> Self {
        Self {
            client,
            collection: collection.into(),
        }
    }
}

#[async_trait]
impl BookingRepository for FirestoreBookingRepository {
    async fn create(&self, booking: &Booking) -> StoreResult<String> {
        let value = serde_json::to_value(booking)?;
        let fields = match value {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::Other(
                    "booking did not serialize to an object".to_string(),
                ))
            }
        };

        let document = self.client.create_document(&self.collection, fields).await?;
        Ok(document.id().to_string())
    }
}
