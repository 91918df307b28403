//! Request validation.
//!
//! A pure check over [`GenerationRequest`] that reports every violated
//! field, not just the first. Downstream generators may assume the
//! invariants hold once validation succeeds.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::types::GenerationRequest;

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color regex is valid");
}

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying every violated field.
#[derive(Debug, Clone, Error)]
#[error("request validation failed ({} invalid field(s))", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl GenerationRequest {
    /// Validate the request, collecting all field violations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Website name is required"));
        }

        if self.description.chars().count() < 50 {
            errors.push(FieldError::new(
                "description",
                "Description must be at least 50 characters",
            ));
        }

        if !HEX_COLOR_REGEX.is_match(&self.primary_color) {
            errors.push(FieldError::new("primaryColor", "Must be a valid hex color"));
        }

        if !HEX_COLOR_REGEX.is_match(&self.secondary_color) {
            errors.push(FieldError::new(
                "secondaryColor",
                "Must be a valid hex color",
            ));
        }

        for (index, raw) in self.image_urls.iter().enumerate() {
            if Url::parse(raw).is_err() {
                errors.push(FieldError::new(
                    format!("imageUrls[{}]", index),
                    "Must be a valid URL",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}
