//! Itinerary service
//!
//! Saves itineraries through the backend and shares them by email.
//! Each operation is a straight pipeline (validate, render, deliver) with a
//! single side effect at the end.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{FieldValue, ItineraryRecord};
use crate::domain::ports::{DeliveryReceipt, ItineraryBackend, MailClient, OutboundEmail};
use crate::domain::validation::{is_valid_email, validate_itinerary};
use crate::email::{render_itinerary_email, render_subject};
use crate::error::AppError;

/// Result of a successful share
#[derive(Debug, Clone)]
pub struct ShareOutcome {
    pub recipient: String,
    pub receipt: DeliveryReceipt,
    pub sent_at: DateTime<Utc>,
}

/// Service for saving and sharing itineraries
pub struct ItineraryService<B, M>
where
    B: ItineraryBackend,
    M: MailClient,
{
    backend: Arc<B>,
    /// `None` when no mail credential is configured
    mailer: Option<Arc<M>>,
    from_email: String,
}

impl<B, M> ItineraryService<B, M>
where
    B: ItineraryBackend,
    M: MailClient,
{
    pub fn new(backend: Arc<B>, mailer: Option<Arc<M>>, from_email: String) -> Self {
        Self {
            backend,
            mailer,
            from_email,
        }
    }

    /// Whether email delivery is available
    pub fn email_configured(&self) -> bool {
        self.mailer.is_some()
    }

    /// Validate an itinerary and forward it to the backend
    pub async fn save(&self, itinerary: &ItineraryRecord) -> Result<ItineraryRecord, AppError> {
        let validation = validate_itinerary(itinerary);
        if !validation.is_valid {
            return Err(AppError::MissingFields(validation.missing_fields));
        }

        let saved = self.backend.create(itinerary).await.map_err(|e| {
            tracing::error!(
                "Save itinerary failed for trip {}: {}",
                display_or_empty(&itinerary.trip_title),
                e
            );
            e
        })?;

        tracing::debug!("Saved itinerary {}", display_or_empty(&saved.id));
        Ok(saved)
    }

    /// List all itineraries held by the backend
    pub async fn list(&self) -> Result<Vec<ItineraryRecord>, AppError> {
        let itineraries = self.backend.fetch_all().await.map_err(|e| {
            tracing::error!("Get itineraries failed: {}", e);
            e
        })?;
        Ok(itineraries)
    }

    /// Email an itinerary to `email`
    ///
    /// The address shape is checked before the backend is contacted, and the
    /// record's completeness is re-checked after lookup since the backend may
    /// have changed it since it was saved.
    pub async fn share(
        &self,
        itinerary_id: &FieldValue,
        email: &str,
        custom_message: Option<&str>,
    ) -> Result<ShareOutcome, AppError> {
        if !is_valid_email(email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        let itinerary = self
            .backend
            .fetch_by_id(itinerary_id)
            .await
            .map_err(|e| {
                tracing::error!("Share itinerary {} failed on lookup: {}", itinerary_id, e);
                e
            })?
            .ok_or_else(|| AppError::NotFound("Itinerary not found".to_string()))?;

        let validation = validate_itinerary(&itinerary);
        if !validation.is_valid {
            return Err(AppError::IncompleteItinerary(validation.missing_fields));
        }

        let mailer = self.mailer.as_ref().ok_or(AppError::EmailNotConfigured)?;

        let sent_at = Utc::now();
        let message = OutboundEmail {
            from: self.from_email.clone(),
            to: email.to_string(),
            subject: render_subject(&itinerary),
            html: render_itinerary_email(&itinerary, custom_message, sent_at),
        };

        let receipt = mailer.send(&message).await.map_err(|e| {
            tracing::error!("Share itinerary {} to {} failed: {}", itinerary_id, email, e);
            e
        })?;

        tracing::info!(
            "Itinerary email sent to {} for trip: {} (provider id {})",
            email,
            message.subject,
            receipt.id
        );

        Ok(ShareOutcome {
            recipient: email.to_string(),
            receipt,
            sent_at,
        })
    }
}

fn display_or_empty(value: &Option<FieldValue>) -> String {
    value.as_ref().map(FieldValue::to_string).unwrap_or_default()
}
