//! # Store
//!
//! SQLite connection pool and schema bootstrap for the `assets` table.
//!
//! The table uses `AUTOINCREMENT`, so an id is never handed out twice, even
//! after the row holding it is deleted.

pub mod config;
mod pool;

pub use config::DatabaseConfig;
pub use pool::{bootstrap, connect};
