//! Asset payload validation
//!
//! `name` and `serialNumber` must be non-blank on create and update. Blank
//! means absent, or empty after trimming whitespace. Accepted values are kept
//! exactly as sent.

use thiserror::Error;

use super::types::{AssetPayload, NewAsset};

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Asset validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field missing or whitespace only
    #[error("field '{field}' must not be blank")]
    Blank { field: &'static str },
}

impl ValidationError {
    /// JSON name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Blank { field } => field,
        }
    }
}

impl AssetPayload {
    /// Check required fields and produce a writable asset.
    ///
    /// The payload `id` is dropped; callers decide the id.
    pub fn validate(self) -> ValidationResult<NewAsset> {
        let name = require("name", self.name)?;
        let serial_number = require("serialNumber", self.serial_number)?;

        Ok(NewAsset {
            name,
            serial_number,
            category: self.category,
            status: self.status,
            acquisition_date: self.acquisition_date,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> ValidationResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::Blank { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn payload(name: Option<&str>, serial: Option<&str>) -> AssetPayload {
        AssetPayload {
            name: name.map(str::to_string),
            serial_number: serial.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        let mut p = payload(Some("Notebook"), Some("123"));
        p.id = Some(42);
        p.category = Some("computer".to_string());
        p.acquisition_date = NaiveDate::from_ymd_opt(2023, 1, 15);

        let asset = p.validate().unwrap();
        assert_eq!(asset.name, "Notebook");
        assert_eq!(asset.serial_number, "123");
        assert_eq!(asset.category.as_deref(), Some("computer"));
        assert_eq!(asset.acquisition_date, NaiveDate::from_ymd_opt(2023, 1, 15));
    }

    #[test]
    fn test_missing_name() {
        let err = payload(None, Some("123")).validate().unwrap_err();
        assert_eq!(err, ValidationError::Blank { field: "name" });
    }

    #[test]
    fn test_whitespace_serial_number() {
        let err = payload(Some("Mouse"), Some("  \t")).validate().unwrap_err();
        assert_eq!(err.field(), "serialNumber");
    }

    #[test]
    fn test_empty_name() {
        let err = payload(Some(""), Some("1")).validate().unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_both_blank_reports_name_first() {
        let err = payload(None, None).validate().unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let asset = payload(Some(" Monitor "), Some("456")).validate().unwrap();
        assert_eq!(asset.name, " Monitor ");
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::Blank { field: "name" };
        assert_eq!(err.to_string(), "field 'name' must not be blank");
    }
}
