//! Bearer-token gate for an HTTP API.
//!
//! - `services::auth`: RS256 token verification against a fixed trust config
//! - `middleware::auth`: request gate (path-prefix and single-route forms)
//! - `api`: login / validate-token / logout endpoints and gated demo routes

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
