//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{FieldValue, ItineraryRecord};
use crate::domain::ports::{DeliveryReceipt, ItineraryBackend, MailClient, OutboundEmail};
use crate::error::{BackendError, MailError};

// ============================================================================
// In-Memory Itinerary Backend
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendFailure {
    Api,
    Timeout,
}

#[derive(Clone, Default)]
pub struct InMemoryItineraryBackend {
    itineraries: Arc<RwLock<Vec<ItineraryRecord>>>,
    failure: Arc<RwLock<Option<BackendFailure>>>,
    fetches: Arc<RwLock<usize>>,
}

impl InMemoryItineraryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a 500 API error
    pub fn failing() -> Self {
        let backend = Self::default();
        *backend.failure.write().unwrap() = Some(BackendFailure::Api);
        backend
    }

    /// Every call fails as if the backend never answered
    pub fn timing_out() -> Self {
        let backend = Self::default();
        *backend.failure.write().unwrap() = Some(BackendFailure::Timeout);
        backend
    }

    /// Pre-populate with an itinerary for testing
    pub fn with_itinerary(self, itinerary: ItineraryRecord) -> Self {
        self.itineraries.write().unwrap().push(itinerary);
        self
    }

    /// Snapshot of all stored itineraries
    pub fn stored(&self) -> Vec<ItineraryRecord> {
        self.itineraries.read().unwrap().clone()
    }

    /// Number of list/lookup calls made so far
    pub fn fetch_count(&self) -> usize {
        *self.fetches.read().unwrap()
    }

    fn check_failure(&self) -> Result<(), BackendError> {
        match *self.failure.read().unwrap() {
            Some(BackendFailure::Api) => Err(BackendError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            }),
            Some(BackendFailure::Timeout) => Err(BackendError::Timeout(Duration::from_secs(10))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ItineraryBackend for InMemoryItineraryBackend {
    async fn fetch_all(&self) -> Result<Vec<ItineraryRecord>, BackendError> {
        *self.fetches.write().unwrap() += 1;
        self.check_failure()?;
        Ok(self.stored())
    }

    async fn create(&self, itinerary: &ItineraryRecord) -> Result<ItineraryRecord, BackendError> {
        self.check_failure()?;

        let mut itineraries = self.itineraries.write().unwrap();
        let mut stored = itinerary.clone();
        stored.id = Some(FieldValue::from(format!("itin-{:03}", itineraries.len() + 1)));
        itineraries.push(stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// Recording Mail Client
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingMailClient {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl RecordingMailClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send is rejected by the "provider"
    pub fn failing() -> Self {
        let client = Self::default();
        *client.should_fail.write().unwrap() = true;
        client
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl MailClient for RecordingMailClient {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        if *self.should_fail.read().unwrap() {
            return Err(MailError::Rejected {
                status: 422,
                message: "Mock rejection".to_string(),
            });
        }

        let mut sent = self.sent.write().unwrap();
        sent.push(email.clone());
        Ok(DeliveryReceipt {
            id: format!("mock-email-{}", sent.len()),
        })
    }
}
