use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    auth::dto::{SignInRequest, SignUpRequest, TokenResponse},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/sign-up", post(sign_up))
        .route("/api/users/sign-in", post(sign_in))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/sign-up",
    tag = "users",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "User registered"),
        (status = 400, description = "Malformed or invalid body"),
        (status = 500, description = "Email taken or store failure")
    )
)]
#[instrument(skip(state, payload))]
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> StatusCode {
    let Json(mut input) = match payload {
        Ok(p) => p,
        Err(e) => {
            error!(handler = "signUp", problem = "unmarshal error", error = %e);
            return StatusCode::BAD_REQUEST;
        }
    };

    if let Err(e) = input.validate() {
        error!(handler = "signUp", problem = "validation error", error = %e);
        return StatusCode::BAD_REQUEST;
    }

    match state.users.sign_up(input).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!(handler = "signUp", problem = "service error", error = %e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Exchange credentials for a bearer token
///
/// Any sign-in failure, including unknown credentials, answers 500.
#[utoipa::path(
    post,
    path = "/api/users/sign-in",
    tag = "users",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 400, description = "Malformed or invalid body"),
        (status = 500, description = "Unknown credentials or store failure")
    )
)]
#[instrument(skip(state, payload))]
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, StatusCode> {
    let Json(mut input) = payload.map_err(|e| {
        error!(handler = "signIn", problem = "unmarshal error", error = %e);
        StatusCode::BAD_REQUEST
    })?;

    input.validate().map_err(|e| {
        error!(handler = "signIn", problem = "validation error", error = %e);
        StatusCode::BAD_REQUEST
    })?;

    let token = state.users.sign_in(input).await.map_err(|e| {
        error!(handler = "signIn", problem = "service error", error = %e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(TokenResponse { token }))
}
