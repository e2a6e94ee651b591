//! assetdb - A minimal asset-inventory record keeper
//!
//! HTTP routes → record-access layer → SQLite store, for a single `Asset`
//! resource.

pub mod asset;
pub mod cli;
pub mod database;
pub mod http_server;
pub mod repository;
