//! Email module
//!
//! HTML rendering of itineraries for delivery by the mail client.

pub mod renderer;

pub use renderer::{render_itinerary_email, render_subject};
