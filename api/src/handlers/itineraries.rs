//! Itinerary handlers
//!
//! Endpoints for saving, listing and sharing itineraries.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{FieldValue, ItineraryRecord};
use crate::domain::ports::{ItineraryBackend, MailClient};
use crate::error::AppError;
use crate::AppState;

/// Response body for a saved itinerary
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub itinerary: ItineraryRecord,
}

/// Request body for sharing an itinerary by email
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    #[serde(default)]
    pub itinerary_id: Option<FieldValue>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub custom_message: Option<String>,
}

/// Response body for a shared itinerary
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub success: bool,
    pub message: String,
    /// RFC 3339 time the email was handed to the provider
    pub timestamp: String,
}

/// POST /api/save-itinerary
///
/// Validate the itinerary and forward it to the backend.
pub async fn save_itinerary<B, M>(
    State(state): State<AppState<B, M>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError>
where
    B: ItineraryBackend + 'static,
    M: MailClient + 'static,
{
    let Json(body) = payload?;
    let itinerary = match body {
        Value::Object(_) => serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid itinerary: {}", e)))?,
        // Not a record, so every required field is missing
        _ => ItineraryRecord::default(),
    };

    let saved = state.itinerary_service.save(&itinerary).await?;

    Ok(Json(SaveResponse {
        success: true,
        message: "Itinerary saved successfully".to_string(),
        itinerary: saved,
    }))
}

/// POST /api/share-itinerary
///
/// Email an existing itinerary to a client.
pub async fn share_itinerary<B, M>(
    State(state): State<AppState<B, M>>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> Result<Json<ShareResponse>, AppError>
where
    B: ItineraryBackend + 'static,
    M: MailClient + 'static,
{
    let Json(request) = payload?;
    let itinerary_id = request.itinerary_id.filter(usable_id);
    let email = request.email.filter(|e| !e.trim().is_empty());

    let (Some(itinerary_id), Some(email)) = (itinerary_id, email) else {
        return Err(AppError::BadRequest(
            "Missing required fields: itineraryId and email".to_string(),
        ));
    };

    let outcome = state
        .itinerary_service
        .share(&itinerary_id, &email, request.custom_message.as_deref())
        .await?;

    Ok(Json(ShareResponse {
        success: true,
        message: format!("Itinerary sent to {}", outcome.recipient),
        timestamp: outcome.sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Blank text, zero, booleans and structured values do not identify a record
fn usable_id(id: &FieldValue) -> bool {
    match id {
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Number(n) => n.as_f64() != Some(0.0),
        FieldValue::Flag(_) | FieldValue::Other(_) => false,
    }
}

/// GET /api/itineraries
///
/// List itineraries from the backend.
pub async fn list_itineraries<B, M>(
    State(state): State<AppState<B, M>>,
) -> Result<Json<Vec<ItineraryRecord>>, AppError>
where
    B: ItineraryBackend + 'static,
    M: MailClient + 'static,
{
    Ok(Json(state.itinerary_service.list().await?))
}
