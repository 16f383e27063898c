mod firestore_booking_repository;
mod firestore_dress_repository;
mod traits;

pub use firestore_booking_repository::FirestoreBookingRepository;
pub use firestore_dress_repository::FirestoreDressRepository;
pub use traits::{BookingRepository, DressRepository};
