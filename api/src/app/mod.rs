//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod itinerary_service;

pub use itinerary_service::ItineraryService;
