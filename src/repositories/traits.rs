use crate::error::StoreResult;
use crate::models::{Booking, Dress};
use async_trait::async_trait;

/// Repository for the dress catalog.
///
/// Provides abstraction over catalog storage, enabling different
/// implementations (Firestore client, mock).
#[async_trait]
pub trait DressRepository: Send + Sync {
    /// Retrieve every dress in the catalog.
    async fn list_all(&self) -> StoreResult<Vec<Dress>>;
}

/// Repository for fitting bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return the store-assigned id.
    async fn create(&self, booking: &Booking) -> StoreResult<String>;
}
