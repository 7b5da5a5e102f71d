//! Extinguisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        extinguisher::{CreateExtinguisher, UpdateExtinguisher},
        Extinguisher, FireClass, Pagination,
    },
};

use super::AuthenticatedUser;

/// List extinguishers
#[utoipa::path(
    get,
    path = "/extinguishers",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(Pagination),
    responses(
        (status = 200, description = "List of extinguishers", body = Vec<Extinguisher>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_extinguishers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<Extinguisher>>> {
    let extinguishers = state.services.extinguishers.list(&caller, pagination).await?;
    Ok(Json(extinguishers))
}

/// List extinguishers of one fire class
#[utoipa::path(
    get,
    path = "/extinguishers/by-type/{extinguisher_type}",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(
        ("extinguisher_type" = FireClass, Path, description = "Fire class"),
        Pagination
    ),
    responses(
        (status = 200, description = "Matching extinguishers", body = Vec<Extinguisher>),
        (status = 400, description = "Unknown fire class")
    )
)]
pub async fn list_by_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(extinguisher_type): Path<String>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<Extinguisher>>> {
    let extinguisher_type: FireClass = extinguisher_type.parse().map_err(AppError::BadRequest)?;
    let extinguishers = state
        .services
        .extinguishers
        .list_by_type(&caller, extinguisher_type, pagination)
        .await?;
    Ok(Json(extinguishers))
}

/// Distinct fire classes in the inventory
#[utoipa::path(
    get,
    path = "/extinguishers/types",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fire classes in use", body = Vec<FireClass>)
    )
)]
pub async fn list_types(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
) -> AppResult<Json<Vec<FireClass>>> {
    let types = state.services.extinguishers.types(&caller).await?;
    Ok(Json(types))
}

/// Get an extinguisher
#[utoipa::path(
    get,
    path = "/extinguishers/{id}",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Extinguisher ID")
    ),
    responses(
        (status = 200, description = "Extinguisher details", body = Extinguisher),
        (status = 404, description = "Extinguisher not found")
    )
)]
pub async fn get_extinguisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Extinguisher>> {
    let extinguisher = state.services.extinguishers.get_by_id(&caller, id).await?;
    Ok(Json(extinguisher))
}

/// Create an extinguisher in a box
///
/// An unknown box id places the extinguisher in the warehouse.
#[utoipa::path(
    post,
    path = "/boxes/{id}/extinguishers",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Target box ID")
    ),
    request_body = CreateExtinguisher,
    responses(
        (status = 201, description = "Extinguisher created", body = Extinguisher)
    )
)]
pub async fn create_extinguisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(box_id): Path<i32>,
    Json(input): Json<CreateExtinguisher>,
) -> AppResult<(StatusCode, Json<Extinguisher>)> {
    let created = state
        .services
        .extinguishers
        .create(&caller, input, box_id)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an extinguisher
#[utoipa::path(
    put,
    path = "/extinguishers/{id}",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Extinguisher ID")
    ),
    request_body = UpdateExtinguisher,
    responses(
        (status = 200, description = "Extinguisher updated", body = Extinguisher),
        (status = 404, description = "Extinguisher not found")
    )
)]
pub async fn update_extinguisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateExtinguisher>,
) -> AppResult<Json<Extinguisher>> {
    let updated = state.services.extinguishers.update(&caller, id, patch).await?;
    Ok(Json(updated))
}

/// Deactivate an extinguisher and return it to the warehouse
#[utoipa::path(
    delete,
    path = "/extinguishers/{id}",
    tag = "extinguishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Extinguisher ID")
    ),
    responses(
        (status = 200, description = "Extinguisher deactivated", body = Extinguisher),
        (status = 404, description = "Extinguisher not found")
    )
)]
pub async fn delete_extinguisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Extinguisher>> {
    state
        .services
        .extinguishers
        .soft_deactivate(&caller, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Extinguisher {} not found", id)))
}
