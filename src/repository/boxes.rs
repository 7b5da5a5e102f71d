//! Storage box repository

use async_trait::async_trait;
use chrono::Utc;

use super::{BoxStore, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{
        storage_box::{CreateBox, DEFAULT_BOX_SIZE, DEFAULT_BUILDING, DEFAULT_ROOM, WAREHOUSE_BOX_SIZE},
        Page, StorageBox,
    },
};

#[async_trait]
impl BoxStore for Repository {
    async fn boxes_list(&self, page: Page) -> AppResult<Vec<StorageBox>> {
        let rows = sqlx::query_as::<_, StorageBox>(
            "SELECT * FROM boxes ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn boxes_get_by_id(&self, id: i32) -> AppResult<Option<StorageBox>> {
        let row = sqlx::query_as::<_, StorageBox>("SELECT * FROM boxes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn boxes_find_warehouse(&self) -> AppResult<Option<StorageBox>> {
        let row = sqlx::query_as::<_, StorageBox>(
            "SELECT * FROM boxes WHERE box_size = $1 ORDER BY id LIMIT 1",
        )
        .bind(WAREHOUSE_BOX_SIZE)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn boxes_create(&self, data: &CreateBox) -> AppResult<StorageBox> {
        let row = sqlx::query_as::<_, StorageBox>(
            r#"
            INSERT INTO boxes (box_size, building, room, location_description, is_damaged)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.box_size.as_deref().unwrap_or(DEFAULT_BOX_SIZE))
        .bind(data.building.as_deref().unwrap_or(DEFAULT_BUILDING))
        .bind(data.room.as_deref().unwrap_or(DEFAULT_ROOM))
        .bind(&data.location_description)
        .bind(data.is_damaged.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn boxes_update(&self, storage_box: &StorageBox) -> AppResult<StorageBox> {
        sqlx::query_as::<_, StorageBox>(
            r#"
            UPDATE boxes
            SET box_size = $1, building = $2, room = $3, location_description = $4,
                is_damaged = $5, updated_at = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&storage_box.box_size)
        .bind(&storage_box.building)
        .bind(&storage_box.room)
        .bind(&storage_box.location_description)
        .bind(storage_box.is_damaged)
        .bind(Utc::now())
        .bind(storage_box.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Box {} not found", storage_box.id)))
    }
}
