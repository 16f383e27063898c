use async_trait::async_trait;
use bridal_fulfillment::error::{StoreError, StoreResult};
use bridal_fulfillment::models::Booking;
use bridal_fulfillment::repositories::BookingRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock booking repository for testing.
///
/// Stores created bookings in memory so tests can assert exactly what was
/// written (or that nothing was), and can be switched into a failing mode to
/// exercise the apology paths.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookingRepository {
    bookings: Arc<Mutex<Vec<Booking>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookingRepository {
    /// Create a new empty MockBookingRepository.
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Get all bookings written so far, in creation order.
    pub fn created_bookings(&self) -> Vec<Booking> {
        let bookings = self.bookings.lock().unwrap();
        bookings.clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: &Booking) -> StoreResult<String> {
        self.track_call("create");

        if *self.fail.lock().unwrap() {
            return Err(StoreError::HttpError(
                "simulated connection failure".to_string(),
            ));
        }

        let mut bookings = self.bookings.lock().unwrap();
        bookings.push(booking.clone());
        Ok(format!("booking-{}", bookings.len()))
    }
}
