//! # HTTP Server Module
//!
//! Axum server exposing the asset inventory.
//!
//! # Endpoints
//!
//! - `/health` - Health check, including store reachability
//! - `/assets` - List (optionally `?status=`) and create
//! - `/assets/:id` - Read, replace, delete

pub mod asset_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{RestError, RestResult};
pub use server::{build_router, HttpServer};
