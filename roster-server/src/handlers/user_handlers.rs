use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, errors::AppResult};
use roster_core::{ApiResponse, User, UserPayload};

/// Create a new user; fails with 400 on a duplicate email.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    payload.validate()?;

    let mut store = state.store.lock().await;
    let user = store.create(payload)?;

    info!(id = user.id, email = %user.email, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Query parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub city: Option<String>,
}

/// List all users, or only those in a city (case-insensitive match).
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    // An empty city parameter means no filter, as the registry has always
    // treated it.
    let city = query.city.as_deref().filter(|c| !c.is_empty());

    let store = state.store.lock().await;
    let users = store.list(city)?;

    Ok(Json(users))
}

/// Replace every field except the id of an existing user.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(payload): Json<UserPayload>,
) -> AppResult<Json<User>> {
    payload.validate()?;

    let mut store = state.store.lock().await;
    let user = store.update(user_id, payload)?;

    info!(id = user.id, "user updated");

    Ok(Json(user))
}

/// Delete a user by id.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> AppResult<Json<ApiResponse>> {
    let mut store = state.store.lock().await;
    store.delete(user_id)?;

    info!(id = user_id, "user deleted");

    Ok(Json(ApiResponse::message("User deleted")))
}
