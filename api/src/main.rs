//! Itinerary Share Service
//!
//! A small relay in front of the itinerary backend: it validates and forwards
//! itineraries for storage and emails formatted itineraries to clients through
//! Resend. Uses hexagonal (ports & adapters) architecture so the backend and
//! the mail provider can be swapped for fakes in tests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod email;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpItineraryBackend, OutboundPolicy, ResendMailClient};
use app::ItineraryService;
use config::Config;
use domain::ports::{ItineraryBackend, MailClient};

/// Application state shared across all handlers
pub struct AppState<B, M>
where
    B: ItineraryBackend,
    M: MailClient,
{
    pub itinerary_service: Arc<ItineraryService<B, M>>,
}

// Manual impl: derive would require `B: Clone` and `M: Clone`
impl<B, M> Clone for AppState<B, M>
where
    B: ItineraryBackend,
    M: MailClient,
{
    fn clone(&self) -> Self {
        Self {
            itinerary_service: self.itinerary_service.clone(),
        }
    }
}

/// Build the HTTP router over any backend and mail client
pub fn router<B, M>(state: AppState<B, M>) -> Router
where
    B: ItineraryBackend + 'static,
    M: MailClient + 'static,
{
    Router::new()
        .route("/health", get(handlers::health::<B, M>))
        .route("/api/save-itinerary", post(handlers::save_itinerary::<B, M>))
        .route(
            "/api/share-itinerary",
            post(handlers::share_itinerary::<B, M>),
        )
        .route("/api/itineraries", get(handlers::list_itineraries::<B, M>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,itinerary_share=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting itinerary share service...");

    // Load configuration
    let config = Config::from_env();
    let policy = OutboundPolicy::new(config.outbound_timeout, config.retry_backoff);

    // Create adapters
    let backend = Arc::new(HttpItineraryBackend::new(
        config.backend_url.clone(),
        policy,
    ));
    tracing::info!("Itinerary backend at {}", config.backend_url);

    let mailer = config.resend_api_key.clone().map(|api_key| {
        Arc::new(ResendMailClient::new(
            config.resend_api_url.clone(),
            api_key,
            policy,
        ))
    });
    if config.email_enabled() {
        tracing::info!("Email delivery enabled (sender {})", config.from_email);
    } else {
        tracing::warn!("RESEND_API_KEY not set; sharing by email is disabled");
    }

    // Create application services
    let itinerary_service = Arc::new(ItineraryService::new(
        backend,
        mailer,
        config.from_email.clone(),
    ));

    let app = router(AppState { itinerary_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
