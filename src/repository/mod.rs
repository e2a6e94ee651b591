//! # Record-Access Layer
//!
//! The only path between the HTTP routes and the store. Every operation is a
//! single SQL statement; nothing spans a transaction.

mod assets;
mod errors;

pub use assets::AssetRepository;
pub use errors::{RepositoryError, RepositoryResult};
