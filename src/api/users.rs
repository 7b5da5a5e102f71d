//! User management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        user::{CreateUser, UpdateProfile, UpdateUser},
        Pagination, User,
    },
};

use super::AuthenticatedUser;

/// List users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    params(Pagination),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is inactive or not admin")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list(&caller, pagination).await?;
    Ok(Json(users))
}

/// Get user details by ID (admin only)
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_id(&caller, id).await?;
    Ok(Json(user))
}

/// Create a new user (admin only)
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state.services.users.create(&caller, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update any user (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let updated = state.services.users.update_by_admin(&caller, id, patch).await?;
    Ok(Json(updated))
}

/// Update the caller's own password and names
#[utoipa::path(
    put,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Profile updated", body = User),
        (status = 400, description = "Invalid password"),
        (status = 403, description = "Caller is inactive")
    )
)]
pub async fn update_me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(patch): Json<UpdateProfile>,
) -> AppResult<Json<User>> {
    let updated = state.services.users.update_self(&caller, patch).await?;
    Ok(Json(updated))
}

/// Delete a user (not available)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 501, description = "Deleting users is not supported")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.users.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
