//! Request Validation
//!
//! Gates every operation before business logic runs. Each validator checks
//! all fields of a payload and either produces the typed application input
//! or a [`ValidationReport`] listing every failing field, rendered as a 400
//! response with per-field details.

use std::collections::BTreeMap;

use crate::application::{SignInInput, SignUpInput, UpdateProfileInput};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::presentation::dto::{SignInRequest, SignUpRequest, UpdateProfileRequest};

// ============================================================================
// Validation Report
// ============================================================================

/// A single field-level validation failure
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated field-level validation failures
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Render as `{"field": ["message", ...], ...}` for the response body.
    pub fn to_details(&self) -> serde_json::Value {
        let mut by_field: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for err in &self.errors {
            by_field.entry(err.field).or_default().push(err.message.clone());
        }
        serde_json::to_value(by_field).unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// Per-request validators
// ============================================================================

/// Validate a signup payload
pub fn validate_sign_up(req: SignUpRequest) -> Result<SignUpInput, ValidationReport> {
    let mut report = ValidationReport::default();

    let username = validate_username(req.username, &mut report);
    let password = validate_required_password(req.password, &mut report);

    let first_name = match req.first_name {
        Some(value) => Some(value),
        None => {
            report.push("firstName", "firstName is required");
            None
        }
    };

    let last_name = match req.last_name {
        Some(value) => Some(value),
        None => {
            report.push("lastName", "lastName is required");
            None
        }
    };

    match (username, first_name, last_name, password) {
        (Some(username), Some(first_name), Some(last_name), Some(password))
            if report.is_empty() =>
        {
            Ok(SignUpInput {
                username,
                first_name,
                last_name,
                password,
            })
        }
        _ => Err(report),
    }
}

/// Validate a signin payload
pub fn validate_sign_in(req: SignInRequest) -> Result<SignInInput, ValidationReport> {
    let mut report = ValidationReport::default();

    let username = validate_username(req.username, &mut report);
    let password = validate_required_password(req.password, &mut report);

    match (username, password) {
        (Some(username), Some(password)) if report.is_empty() => {
            Ok(SignInInput { username, password })
        }
        _ => Err(report),
    }
}

/// Validate a profile update payload. Every field is optional, but a
/// supplied password must satisfy the same policy as at signup.
pub fn validate_update_profile(
    req: UpdateProfileRequest,
) -> Result<UpdateProfileInput, ValidationReport> {
    let mut report = ValidationReport::default();

    let password = match req.password {
        None => None,
        Some(raw) => match RawPassword::new(raw) {
            Ok(password) => Some(password),
            Err(e) => {
                report.push("password", e.to_string());
                None
            }
        },
    };

    if report.is_empty() {
        Ok(UpdateProfileInput {
            password,
            first_name: req.first_name,
            last_name: req.last_name,
        })
    } else {
        Err(report)
    }
}

fn validate_username(
    raw: Option<String>,
    report: &mut ValidationReport,
) -> Option<Email> {
    match raw {
        None => {
            report.push("username", "username is required");
            None
        }
        Some(raw) => match Email::new(raw) {
            Ok(email) => Some(email),
            Err(e) => {
                report.push("username", e.to_string());
                None
            }
        },
    }
}

fn validate_required_password(
    raw: Option<String>,
    report: &mut ValidationReport,
) -> Option<RawPassword> {
    match raw {
        None => {
            report.push("password", "password is required");
            None
        }
        Some(raw) => match RawPassword::new(raw) {
            Ok(password) => Some(password),
            Err(e) => {
                report.push("password", e.to_string());
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_valid() {
        let req = SignUpRequest {
            username: Some("a@b.com".to_string()),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            password: Some("secret1".to_string()),
        };
        let input = validate_sign_up(req).unwrap();
        assert_eq!(input.username.as_str(), "a@b.com");
        assert_eq!(input.first_name, "A");
        assert_eq!(input.last_name, "B");
    }

    #[test]
    fn test_sign_up_all_fields_missing_are_all_reported() {
        let req = SignUpRequest {
            username: None,
            first_name: None,
            last_name: None,
            password: None,
        };
        let report = validate_sign_up(req).unwrap_err();
        let fields: Vec<&str> = report.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields.len(), 4);
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"firstName"));
        assert!(fields.contains(&"lastName"));
        assert!(fields.contains(&"password"));
    }

    #[test]
    fn test_sign_up_invalid_email_and_short_password() {
        let req = SignUpRequest {
            username: Some("not-an-email".to_string()),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            password: Some("short".to_string()),
        };
        let report = validate_sign_up(req).unwrap_err();
        let fields: Vec<&str> = report.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let req = SignInRequest {
            username: Some("a@b.com".to_string()),
            password: None,
        };
        let report = validate_sign_in(req).unwrap_err();
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].field, "password");
    }

    #[test]
    fn test_update_with_no_fields_is_valid() {
        let req = UpdateProfileRequest {
            password: None,
            first_name: None,
            last_name: None,
        };
        let input = validate_update_profile(req).unwrap();
        assert!(input.password.is_none());
        assert!(input.first_name.is_none());
    }

    #[test]
    fn test_update_password_policy_matches_signup() {
        // The signup minimum applies on the update path too.
        let req = UpdateProfileRequest {
            password: Some("short".to_string()),
            first_name: None,
            last_name: None,
        };
        let report = validate_update_profile(req).unwrap_err();
        assert_eq!(report.errors()[0].field, "password");
    }

    #[test]
    fn test_report_details_grouped_by_field() {
        let mut report = ValidationReport::default();
        report.push("username", "username is required");
        report.push("password", "password is required");

        let details = report.to_details();
        assert!(details.get("username").is_some());
        assert_eq!(
            details["password"][0],
            serde_json::json!("password is required")
        );
    }
}
