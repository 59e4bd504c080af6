//! Itinerary backend port trait
//!
//! Defines the interface to the external service that owns itinerary records.

use async_trait::async_trait;

use crate::domain::entities::{FieldValue, ItineraryRecord};
use crate::error::BackendError;

/// Port trait for the itinerary storage service
#[async_trait]
pub trait ItineraryBackend: Send + Sync {
    /// List every itinerary the backend holds
    async fn fetch_all(&self) -> Result<Vec<ItineraryRecord>, BackendError>;

    /// Find an itinerary by id
    ///
    /// The backend has no per-id route, so the default implementation scans
    /// the full list and matches ids by JSON type and value.
    async fn fetch_by_id(&self, id: &FieldValue) -> Result<Option<ItineraryRecord>, BackendError> {
        Ok(self
            .fetch_all()
            .await?
            .into_iter()
            .find(|itinerary| itinerary.has_id(id)))
    }

    /// Store a new itinerary and return the record as persisted
    async fn create(&self, itinerary: &ItineraryRecord) -> Result<ItineraryRecord, BackendError>;
}
