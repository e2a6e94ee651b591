//! Asset types and their JSON representation
//!
//! JSON keys are camelCase (`serialNumber`, `acquisitionDate`); dates are
//! `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// System-assigned identifier, never reused
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub category: Option<String>,
    /// Free-form lifecycle status (e.g. "in_use")
    pub status: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
}

/// Asset request body
///
/// Required fields are optional here so that an absent `name` surfaces as a
/// validation failure rather than a decode failure. A body `id` is accepted
/// and never used; the store or the request path decides the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
}

/// A validated asset, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub serial_number: String,
    pub category: Option<String>,
    pub status: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
}

/// List filter, from the `/assets` query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetFilter {
    /// Exact match on `status`
    #[serde(default)]
    pub status: Option<String>,
}

impl AssetFilter {
    /// Filter on a single status value
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}
