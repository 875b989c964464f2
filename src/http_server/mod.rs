//! # HTTP Server Module
//!
//! Axum server exposing the site's form endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/contact` - Store a contact-form message
//! - `POST /api/newsletter/subscribe` - Subscribe an email to the newsletter
//! - `GET /health` - Health check

pub mod body;
pub mod config;
pub mod contact_routes;
pub mod errors;
pub mod newsletter_routes;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::HttpServer;
