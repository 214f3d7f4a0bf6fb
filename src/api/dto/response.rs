//! Common response envelope.
//!
//! Successful bodies look like `{"status": "OK", ...}`, failures like
//! `{"status": "Error", "error": "<message>"}`.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Bare status body, used by endpoints with nothing else to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: error.into(),
        }
    }
}

/// Renders validation failures as one human-readable line.
///
/// Each failing field contributes a single message, e.g.
/// `field Url is a required field` or `field Url is not a valid URL`.
/// A `required` failure wins over any other failure on the same field.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .map(|(field, field_errors)| {
            let name = display_field_name(&field);
            let required = field_errors.iter().any(|e| e.code == "required");

            match field_errors.first() {
                _ if required => format!("field {name} is a required field"),
                Some(e) if e.code == "url" => format!("field {name} is not a valid URL"),
                Some(e) => format!("field {name} is not valid ({})", e.code),
                None => format!("field {name} is not valid"),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_field_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
