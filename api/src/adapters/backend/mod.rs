//! Itinerary backend adapter
//!
//! HTTP client for the external itinerary storage service.

pub mod client;

pub use client::HttpItineraryBackend;
