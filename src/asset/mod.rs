//! Asset data model
//!
//! The single inventory record type, in its three lifecycle shapes:
//!
//! - `AssetPayload` - request body as received, every field optional
//! - `NewAsset` - a payload that passed validation
//! - `Asset` - a persisted row, always carrying its `id`
//!
//! Only a `NewAsset` can be written to the store.

mod types;
mod validator;

pub use types::{Asset, AssetFilter, AssetPayload, NewAsset};
pub use validator::{ValidationError, ValidationResult};
