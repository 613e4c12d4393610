//! Yoyaku client library
//!
//! Consumers of the reservation API:
//!
//! - [`ReservationClient`] - typed HTTP client over the server's
//!   JSON envelope
//! - [`DashboardFilter`] - the admin dashboard's client-side list
//!   filtering (presentation only, never a consistency mechanism)
//! - [`form`] - intake-form rules: minimum selectable date, party
//!   sizes, and pre-submit validation

pub mod client;
pub mod error;
pub mod filter;
pub mod form;

pub use client::ReservationClient;
pub use error::ClientError;
pub use filter::DashboardFilter;
