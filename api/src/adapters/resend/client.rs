//! Resend email API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapters::outbound::OutboundPolicy;
use crate::domain::ports::{DeliveryReceipt, MailClient, OutboundEmail};
use crate::error::MailError;

/// Implementation of the Resend transactional email client
pub struct ResendMailClient {
    http: Client,
    base_url: String,
    api_key: String,
    policy: OutboundPolicy,
}

impl ResendMailClient {
    pub fn new(base_url: String, api_key: String, policy: OutboundPolicy) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            policy,
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<DeliveryReceipt, MailError> {
        let status = response.status();

        if status.is_success() {
            let body: SendEmailResponse = response
                .json()
                .await
                .map_err(|e| MailError::Deserialization(e.to_string()))?;
            return Ok(DeliveryReceipt { id: body.id });
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ResendErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        match status.as_u16() {
            401 => Err(MailError::Unauthorized),
            403 | 422 => Err(MailError::Rejected {
                status: status.as_u16(),
                message,
            }),
            429 => Err(MailError::RateLimited),
            code => Err(MailError::Api {
                status: code,
                message,
            }),
        }
    }

    async fn post_email(
        &self,
        email: &OutboundEmail,
        idempotency_key: &str,
    ) -> Result<DeliveryReceipt, MailError> {
        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Idempotency-Key", idempotency_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: [&email.to],
                subject: &email.subject,
                html: &email.html,
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    message: String,
}

#[async_trait]
impl MailClient for ResendMailClient {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        // Same key on retry so the provider drops a duplicate delivery
        let key = Uuid::new_v4().to_string();
        let key = key.as_str();

        self.policy
            .with_retry("send email", move || self.post_email(email, key))
            .await
    }
}
