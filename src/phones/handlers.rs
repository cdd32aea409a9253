use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument};

use super::{dto::PhoneInput, repo_types::Phone};
use crate::{auth::jwt::AuthUser, state::AppState};

pub fn phone_routes() -> Router<AppState> {
    Router::new()
        .route("/api/phones", post(create_phone).get(get_all_phones))
        .route(
            "/api/phones/:id",
            get(get_phone_by_id)
                .put(update_phone_by_id)
                .delete(delete_phone_by_id),
        )
}

fn phone_id(
    handler: &'static str,
    path: Result<Path<i64>, PathRejection>,
) -> Result<i64, StatusCode> {
    let id = match path {
        Ok(Path(id)) => id,
        Err(e) => {
            error!(handler, problem = "getting id from request", error = %e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };
    if id <= 0 {
        error!(handler, problem = "getting id from request", id, "id must be positive");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(id)
}

fn phone_input(
    handler: &'static str,
    payload: Result<Json<PhoneInput>, JsonRejection>,
) -> Result<PhoneInput, StatusCode> {
    let Json(input) = payload.map_err(|e| {
        error!(handler, problem = "unmarshal error", error = %e);
        StatusCode::BAD_REQUEST
    })?;
    input.validate().map_err(|e| {
        error!(handler, problem = "validation error", error = %e);
        StatusCode::BAD_REQUEST
    })?;
    Ok(input)
}

/// Create a phone
#[utoipa::path(
    post,
    path = "/api/phones",
    tag = "phones",
    request_body = PhoneInput,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Phone created", body = Phone),
        (status = 400, description = "Malformed or invalid body"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_phone(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<PhoneInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Phone>), StatusCode> {
    let input = phone_input("createPhone", payload)?;
    let phone = state.phones.create_phone(input).await.map_err(|e| {
        error!(handler = "createPhone", problem = "service error", error = %e);
        e.status()
    })?;
    Ok((StatusCode::CREATED, Json(phone)))
}

/// List every phone ordered by id
#[utoipa::path(
    get,
    path = "/api/phones",
    tag = "phones",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All phones", body = Vec<Phone>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    )
)]
#[instrument(skip(state))]
pub async fn get_all_phones(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Phone>>, StatusCode> {
    let phones = state.phones.get_all_phones().await.map_err(|e| {
        error!(handler = "getAllPhones", problem = "service error", error = %e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(phones))
}

#[utoipa::path(
    get,
    path = "/api/phones/{id}",
    tag = "phones",
    params(("id" = i64, Path, description = "Phone id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Phone found", body = Phone),
        (status = 400, description = "Bad id or no such phone"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    )
)]
#[instrument(skip(state, path))]
pub async fn get_phone_by_id(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Phone>, StatusCode> {
    let id = phone_id("getPhoneById", path)?;
    let phone = state.phones.get_phone_by_id(id).await.map_err(|e| {
        error!(handler = "getPhoneById", problem = "service error", id, error = %e);
        e.status()
    })?;
    Ok(Json(phone))
}

/// Replace every attribute of an existing phone
#[utoipa::path(
    put,
    path = "/api/phones/{id}",
    tag = "phones",
    params(("id" = i64, Path, description = "Phone id")),
    request_body = PhoneInput,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Phone updated"),
        (status = 400, description = "Bad id, invalid body or no such phone"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    )
)]
#[instrument(skip(state, path, payload))]
pub async fn update_phone_by_id(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PhoneInput>, JsonRejection>,
) -> StatusCode {
    let id = match phone_id("updatePhoneById", path) {
        Ok(id) => id,
        Err(status) => return status,
    };
    let input = match phone_input("updatePhoneById", payload) {
        Ok(input) => input,
        Err(status) => return status,
    };

    match state.phones.update_phone_by_id(id, input).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!(handler = "updatePhoneById", problem = "service error", id, error = %e);
            e.status()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/phones/{id}",
    tag = "phones",
    params(("id" = i64, Path, description = "Phone id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Phone deleted"),
        (status = 400, description = "Bad id or no such phone"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store failure")
    )
)]
#[instrument(skip(state, path))]
pub async fn delete_phone_by_id(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> StatusCode {
    let id = match phone_id("deletePhoneById", path) {
        Ok(id) => id,
        Err(status) => return status,
    };

    match state.phones.delete_phone_by_id(id).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!(handler = "deletePhoneById", problem = "service error", id, error = %e);
            e.status()
        }
    }
}
