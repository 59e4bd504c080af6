//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the port traits take `&str`/`&T`
//! parameters, and hand-written fakes let tests inspect exactly what was
//! stored or sent.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
