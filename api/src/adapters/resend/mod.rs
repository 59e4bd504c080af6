//! Resend adapter
//!
//! Implementation of the mail client port on the Resend email API.

pub mod client;

pub use client::ResendMailClient;
