//! Mail client port trait
//!
//! Defines the interface to the transactional email provider.

use async_trait::async_trait;

use crate::error::MailError;

/// A fully rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Provider acknowledgment for an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub id: String,
}

/// Port trait for email delivery
#[async_trait]
pub trait MailClient: Send + Sync {
    /// Hand a message to the provider
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError>;
}
