//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod itineraries;

pub use health::health;
pub use itineraries::{list_itineraries, save_itinerary, share_itinerary};
