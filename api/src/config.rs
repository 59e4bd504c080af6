use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the itinerary storage service
    pub backend_url: String,
    /// Resend API key; email delivery is disabled when unset
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    /// Sender address for outgoing itineraries
    pub from_email: String,
    /// Per-attempt timeout for outbound calls
    pub outbound_timeout: Duration,
    /// Delay before the single retry of an idempotent outbound call
    pub retry_backoff: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3004),
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
            outbound_timeout: Duration::from_secs(
                env::var("OUTBOUND_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            retry_backoff: Duration::from_millis(
                env::var("OUTBOUND_RETRY_BACKOFF_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(250),
            ),
        }
    }

    /// Check if email delivery is configured
    pub fn email_enabled(&self) -> bool {
        self.resend_api_key.is_some()
    }
}
