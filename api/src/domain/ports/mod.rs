//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod backend;
pub mod mail;

pub use backend::ItineraryBackend;
pub use mail::{DeliveryReceipt, MailClient, OutboundEmail};
