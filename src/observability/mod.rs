//! Observability for the submission service
//!
//! Logging goes through `tracing`; this module only wires up the subscriber.
//! Request spans come from tower-http's `TraceLayer` in the HTTP server.
//!
//! # Usage
//!
//! ```ignore
//! use portfolio_api::observability::init_tracing;
//!
//! init_tracing("info", false);
//! tracing::info!(contact_id = 1, "contact message stored");
//! ```

mod logging;

pub use logging::{env_filter, init_tracing};
