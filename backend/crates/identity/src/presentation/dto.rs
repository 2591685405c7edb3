//! API DTOs (Data Transfer Objects)
//!
//! Request fields are deserialized as `Option` so that presence checks are
//! made by the validator and reported per field, instead of serde rejecting
//! the whole payload.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub token: String,
}

// ============================================================================
// Update Profile
// ============================================================================

/// Update profile request; every field optional
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Update profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub message: String,
}

// ============================================================================
// Directory Search
// ============================================================================

/// Directory search query string
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryQuery {
    pub filter: Option<String>,
}

/// Redacted directory projection of a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Directory search response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub users: Vec<DirectoryUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let req: SignUpRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.first_name.is_none());
        assert!(req.last_name.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"username":"a@b.com","firstName":"A","lastName":"B","password":"secret1"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name.as_deref(), Some("A"));
        assert_eq!(req.last_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_directory_user_serializes_camel_case() {
        let user = DirectoryUser {
            id: "id-1".to_string(),
            username: "a@b.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("firstName").is_some());
        assert!(value.get("lastName").is_some());
        assert!(value.get("first_name").is_none());
    }
}
