//! Itinerary backend HTTP client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapters::outbound::OutboundPolicy;
use crate::domain::entities::ItineraryRecord;
use crate::domain::ports::ItineraryBackend;
use crate::error::BackendError;

/// Client for the itinerary storage service's REST API
pub struct HttpItineraryBackend {
    http: Client,
    base_url: String,
    policy: OutboundPolicy,
}

impl HttpItineraryBackend {
    pub fn new(base_url: String, policy: OutboundPolicy) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn list_itineraries(&self) -> Result<Vec<ItineraryRecord>, BackendError> {
        let response = self.http.get(self.api_url("/itineraries")).send().await?;
        let entries: Vec<Value> = self.handle_response(response).await?;

        // Decode per entry so one non-record entry cannot hide the rest
        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(itinerary) => Some(itinerary),
                Err(e) => {
                    tracing::warn!("Skipping unreadable itinerary entry: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn post_itinerary(
        &self,
        itinerary: &ItineraryRecord,
    ) -> Result<ItineraryRecord, BackendError> {
        let response = self
            .http
            .post(self.api_url("/itineraries"))
            .json(itinerary)
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl ItineraryBackend for HttpItineraryBackend {
    async fn fetch_all(&self) -> Result<Vec<ItineraryRecord>, BackendError> {
        self.policy
            .with_retry("fetch itineraries", move || self.list_itineraries())
            .await
    }

    async fn create(&self, itinerary: &ItineraryRecord) -> Result<ItineraryRecord, BackendError> {
        // Not retried: a timed-out POST may still have been stored
        self.policy.once(self.post_itinerary(itinerary)).await
    }
}
