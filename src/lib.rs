//! portfolio-api - Contact form and newsletter backend for a portfolio site
//!
//! Submissions live in process memory and are lost on restart.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod submissions;
