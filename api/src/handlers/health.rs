//! Health handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::ports::{ItineraryBackend, MailClient};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub email_configured: bool,
}

/// GET /health
pub async fn health<B, M>(State(state): State<AppState<B, M>>) -> Json<HealthResponse>
where
    B: ItineraryBackend + 'static,
    M: MailClient + 'static,
{
    Json(HealthResponse {
        status: "ok",
        service: "itinerary-share",
        email_configured: state.itinerary_service.email_configured(),
    })
}
