//! Shared mock repositories for integration tests.

pub mod mock_booking_repository;
pub mod mock_dress_repository;

#[allow(unused_imports)]
pub use mock_booking_repository::MockBookingRepository;
#[allow(unused_imports)]
pub use mock_dress_repository::MockDressRepository;
