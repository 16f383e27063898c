use async_trait::async_trait;
use bridal_fulfillment::error::{StoreError, StoreResult};
use bridal_fulfillment::models::Dress;
use bridal_fulfillment::repositories::DressRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock dress repository for testing.
///
/// Provides an in-memory implementation of DressRepository that can be
/// configured with catalog data, tracks method calls for verification, and
/// can be switched into a failing mode to exercise the apology paths.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDressRepository {
    dresses: Arc<Mutex<Vec<Dress>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDressRepository {
    /// Create a new empty MockDressRepository.
    pub fn new() -> Self {
        Self {
            dresses: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a MockDressRepository seeded with the given catalog.
    pub fn with_dresses(dresses: Vec<Dress>) -> Self {
        let repo = Self::new();
        repo.add_dresses(dresses);
        repo
    }

    /// Add a dress to the mock catalog.
    pub fn add_dress(&self, dress: Dress) {
        let mut dresses = self.dresses.lock().unwrap();
        dresses.push(dress);
    }

    /// Add multiple dresses to the mock catalog, preserving order.
    pub fn add_dresses(&self, dress_list: Vec<Dress>) {
        let mut dresses = self.dresses.lock().unwrap();
        dresses.extend(dress_list);
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Clear all dresses from the catalog.
    pub fn clear(&self) {
        let mut dresses = self.dresses.lock().unwrap();
        dresses.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockDressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DressRepository for MockDressRepository {
    async fn list_all(&self) -> StoreResult<Vec<Dress>> {
        self.track_call("list_all");

        if *self.fail.lock().unwrap() {
            return Err(StoreError::HttpError(
                "simulated connection failure".to_string(),
            ));
        }

        let dresses = self.dresses.lock().unwrap();
        Ok(dresses.clone())
    }
}
