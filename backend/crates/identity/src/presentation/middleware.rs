//! Bearer Token Middleware
//!
//! Middleware for requiring a verified bearer token on protected routes.
//! On success the resolved user ID is stored in request extensions for the
//! handler; on failure the request short-circuits with 401 before the
//! handler runs.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::token::TokenIssuer;
use crate::domain::value_object::user_id::UserId;
use crate::error::IdentityError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub tokens: Arc<TokenIssuer>,
}

/// Authenticated principal stored in request extensions
#[derive(Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(req.headers()) {
        Some(token) => token,
        None => return Err(IdentityError::Unauthenticated.into_response()),
    };

    let user_id = match state.tokens.verify(&token) {
        Ok(user_id) => user_id,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(AuthenticatedUser(user_id));

    Ok(next.run(req).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(
            extract_bearer_token(&headers).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_missing_header() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with_authorization("Bearer ");
        assert!(extract_bearer_token(&headers).is_none());
    }
}
