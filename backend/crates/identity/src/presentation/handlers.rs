//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::application::{
    SearchDirectoryUseCase, SignInUseCase, SignUpUseCase, UpdateProfileUseCase,
};
use crate::domain::repository::ProvisioningRepository;
use crate::error::{IdentityError, IdentityResult};
use crate::presentation::dto::{
    DirectoryQuery, DirectoryResponse, DirectoryUser, SignInRequest, SignInResponse,
    SignUpRequest, SignUpResponse, UpdateProfileRequest, UpdateProfileResponse,
};
use crate::presentation::middleware::AuthenticatedUser;
use crate::presentation::validate;

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> IdentityResult<impl IntoResponse>
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    let input = validate::validate_sign_up(req).map_err(IdentityError::Validation)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User created successfully".to_string(),
            token: output.token,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /signin
pub async fn sign_in<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> IdentityResult<Json<SignInResponse>>
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    let input = validate::validate_sign_in(req).map_err(IdentityError::Validation)?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(SignInResponse {
        token: output.token,
    }))
}

// ============================================================================
// Update Profile (requires authentication)
// ============================================================================

/// PUT /
pub async fn update_profile<R>(
    State(state): State<IdentityAppState<R>>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> IdentityResult<Json<UpdateProfileResponse>>
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    let input = validate::validate_update_profile(req).map_err(IdentityError::Validation)?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    use_case.execute(&principal.0, input).await?;

    Ok(Json(UpdateProfileResponse {
        message: "Updated successfully".to_string(),
    }))
}

// ============================================================================
// Directory Search (unauthenticated by design)
// ============================================================================

/// GET /bulk?filter=
pub async fn search_directory<R>(
    State(state): State<IdentityAppState<R>>,
    Query(query): Query<DirectoryQuery>,
) -> IdentityResult<Json<DirectoryResponse>>
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    let filter = query.filter.unwrap_or_default();

    let use_case = SearchDirectoryUseCase::new(state.repo.clone());
    let entries = use_case.execute(&filter).await?;

    Ok(Json(DirectoryResponse {
        users: entries
            .into_iter()
            .map(|entry| DirectoryUser {
                id: entry.id.to_string(),
                username: entry.username,
                first_name: entry.first_name,
                last_name: entry.last_name,
            })
            .collect(),
    }))
}
