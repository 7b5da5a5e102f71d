//! Storage box endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        storage_box::{CreateBox, StorageBoxDetails, UpdateBox},
        Pagination, StorageBox,
    },
};

use super::AuthenticatedUser;

/// List boxes
#[utoipa::path(
    get,
    path = "/boxes",
    tag = "boxes",
    security(("bearer_auth" = [])),
    params(Pagination),
    responses(
        (status = 200, description = "List of boxes", body = Vec<StorageBox>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_boxes(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<StorageBox>>> {
    let boxes = state.services.boxes.list(&caller, pagination).await?;
    Ok(Json(boxes))
}

/// Get a box with its extinguishers
#[utoipa::path(
    get,
    path = "/boxes/{id}",
    tag = "boxes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Box ID")
    ),
    responses(
        (status = 200, description = "Box details", body = StorageBoxDetails),
        (status = 404, description = "Box not found")
    )
)]
pub async fn get_box(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<StorageBoxDetails>> {
    let details = state.services.boxes.get_by_id(&caller, id).await?;
    Ok(Json(details))
}

/// Create a box
#[utoipa::path(
    post,
    path = "/boxes",
    tag = "boxes",
    security(("bearer_auth" = [])),
    request_body = CreateBox,
    responses(
        (status = 201, description = "Box created", body = StorageBox)
    )
)]
pub async fn create_box(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(input): Json<CreateBox>,
) -> AppResult<(StatusCode, Json<StorageBox>)> {
    let created = state.services.boxes.create(&caller, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a box
#[utoipa::path(
    put,
    path = "/boxes/{id}",
    tag = "boxes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Box ID")
    ),
    request_body = UpdateBox,
    responses(
        (status = 200, description = "Box updated", body = StorageBox),
        (status = 404, description = "Box not found")
    )
)]
pub async fn update_box(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateBox>,
) -> AppResult<Json<StorageBox>> {
    let updated = state.services.boxes.update(&caller, id, patch).await?;
    Ok(Json(updated))
}

/// Delete a box (not available)
#[utoipa::path(
    delete,
    path = "/boxes/{id}",
    tag = "boxes",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Box ID")
    ),
    responses(
        (status = 501, description = "Deleting boxes is not supported")
    )
)]
pub async fn delete_box(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.boxes.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
