//! Unified error types for the itinerary share service
//!
//! This module defines error types for each layer:
//! - `BackendError`: itinerary storage client errors
//! - `MailError`: email provider client errors
//! - `AppError`: Application layer errors (wraps client errors for HTTP responses)

use std::time::Duration;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Itinerary backend client errors
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Email provider client errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Message rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Itinerary is incomplete: {}", .0.join(", "))]
    IncompleteItinerary(Vec<&'static str>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Email service not configured")]
    EmailNotConfigured,

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(rename = "missingFields", skip_serializing_if = "Option::is_none")]
    missing_fields: Option<Vec<&'static str>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, missing_fields) = match self {
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
                Some(format!("Please provide: {}", fields.join(", "))),
                Some(fields),
            ),
            AppError::IncompleteItinerary(fields) => (
                StatusCode::BAD_REQUEST,
                "Itinerary is incomplete".to_string(),
                None,
                Some(fields),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None, None),
            AppError::EmailNotConfigured => {
                tracing::error!("Email requested but RESEND_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Email service not configured".to_string(),
                    None,
                    None,
                )
            }
            AppError::Backend(e) => match e {
                BackendError::Timeout(_) => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Itinerary backend timed out".to_string(),
                    None,
                    None,
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Itinerary backend unavailable".to_string(),
                    None,
                    None,
                ),
            },
            AppError::Mail(e) => match e {
                MailError::Timeout(_) => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Email provider timed out".to_string(),
                    None,
                    None,
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email".to_string(),
                    None,
                    None,
                ),
            },
        };

        let body = Json(ErrorResponse {
            error,
            message,
            missing_fields,
        });

        (status, body).into_response()
    }
}
