//! Mock REST API over the synthetic verification-data generator.
//!
//! Serves the endpoints the dashboard expects from its real backend,
//! generating a fresh dataset per request.

pub mod handlers;
pub mod router;
pub mod server;
