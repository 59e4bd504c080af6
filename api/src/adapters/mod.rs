//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod backend;
pub mod outbound;
pub mod resend;

pub use backend::HttpItineraryBackend;
pub use outbound::OutboundPolicy;
pub use resend::ResendMailClient;
