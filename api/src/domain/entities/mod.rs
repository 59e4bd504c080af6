//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod itinerary;

pub use itinerary::{present, DayPlan, FieldValue, ItineraryRecord};
