//! Timeout and retry policy for outbound calls
//!
//! Every call to the backend or the mail provider runs under a per-attempt
//! timeout. Idempotent calls may additionally get one retry after a fixed
//! backoff when the first attempt fails transiently.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::error::{BackendError, MailError};

/// Errors that the outbound policy knows how to classify
pub trait OutboundError: Display {
    /// Build the error reported when an attempt exceeds its deadline
    fn timed_out(after: Duration) -> Self;

    /// Whether a second attempt could plausibly succeed
    fn is_transient(&self) -> bool;
}

fn transient_request(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout() || e.is_request()
}

impl OutboundError for BackendError {
    fn timed_out(after: Duration) -> Self {
        BackendError::Timeout(after)
    }

    fn is_transient(&self) -> bool {
        match self {
            BackendError::Request(e) => transient_request(e),
            BackendError::Api { status, .. } => *status >= 500,
            BackendError::Timeout(_) => true,
            BackendError::Deserialization(_) => false,
        }
    }
}

impl OutboundError for MailError {
    fn timed_out(after: Duration) -> Self {
        MailError::Timeout(after)
    }

    fn is_transient(&self) -> bool {
        match self {
            MailError::Request(e) => transient_request(e),
            MailError::Api { status, .. } => *status >= 500,
            MailError::Timeout(_) => true,
            MailError::Unauthorized
            | MailError::Rejected { .. }
            | MailError::RateLimited
            | MailError::Deserialization(_) => false,
        }
    }
}

/// Deadline and retry settings shared by the outbound adapters
#[derive(Debug, Clone, Copy)]
pub struct OutboundPolicy {
    pub timeout: Duration,
    pub backoff: Duration,
}

impl OutboundPolicy {
    pub fn new(timeout: Duration, backoff: Duration) -> Self {
        Self { timeout, backoff }
    }

    /// Run a single attempt under the deadline
    pub async fn once<T, E, Fut>(&self, attempt: Fut) -> Result<T, E>
    where
        E: OutboundError,
        Fut: Future<Output = Result<T, E>>,
    {
        match tokio::time::timeout(self.timeout, attempt).await {
            Ok(result) => result,
            Err(_) => Err(E::timed_out(self.timeout)),
        }
    }

    /// Run `call`, retrying once after `backoff` if the first attempt fails
    /// transiently. Only use this for idempotent calls.
    pub async fn with_retry<T, E, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, E>
    where
        E: OutboundError,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.once(call()).await {
            Err(e) if e.is_transient() => {
                tracing::warn!(
                    "{} failed ({}), retrying in {:?}",
                    operation,
                    e,
                    self.backoff
                );
                tokio::time::sleep(self.backoff).await;
                self.once(call()).await
            }
            result => result,
        }
    }
}
