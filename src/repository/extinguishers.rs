//! Extinguisher repository

use async_trait::async_trait;
use chrono::Utc;

use super::{ExtinguisherStore, Repository};
use crate::{
    error::{AppError, AppResult},
    models::{extinguisher::CreateExtinguisher, Extinguisher, FireClass, Page},
};

#[async_trait]
impl ExtinguisherStore for Repository {
    async fn extinguishers_list(&self, page: Page) -> AppResult<Vec<Extinguisher>> {
        let rows = sqlx::query_as::<_, Extinguisher>(
            "SELECT * FROM extinguishers ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn extinguishers_list_by_type(
        &self,
        extinguisher_type: FireClass,
        page: Page,
    ) -> AppResult<Vec<Extinguisher>> {
        let rows = sqlx::query_as::<_, Extinguisher>(
            r#"
            SELECT * FROM extinguishers
            WHERE extinguisher_type = $1
            ORDER BY id OFFSET $2 LIMIT $3
            "#,
        )
        .bind(extinguisher_type)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn extinguishers_list_by_box(&self, box_id: i32) -> AppResult<Vec<Extinguisher>> {
        let rows = sqlx::query_as::<_, Extinguisher>(
            "SELECT * FROM extinguishers WHERE assigned_box_id = $1 ORDER BY id",
        )
        .bind(box_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn extinguishers_get_by_id(&self, id: i32) -> AppResult<Option<Extinguisher>> {
        let row = sqlx::query_as::<_, Extinguisher>("SELECT * FROM extinguishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn extinguishers_types(&self) -> AppResult<Vec<FireClass>> {
        let types: Vec<FireClass> = sqlx::query_scalar(
            "SELECT DISTINCT extinguisher_type FROM extinguishers ORDER BY extinguisher_type",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }

    async fn extinguishers_create(
        &self,
        data: &CreateExtinguisher,
        box_id: i32,
    ) -> AppResult<Extinguisher> {
        let row = sqlx::query_as::<_, Extinguisher>(
            r#"
            INSERT INTO extinguishers
                (manufacturer_name, supplier_name, serial_number, purchase_date,
                 extinguisher_type, is_active, assigned_box_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.manufacturer_name)
        .bind(&data.supplier_name)
        .bind(&data.serial_number)
        .bind(data.purchase_date.unwrap_or_else(Utc::now))
        .bind(data.extinguisher_type)
        .bind(data.is_active.unwrap_or(true))
        .bind(box_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn extinguishers_update(&self, extinguisher: &Extinguisher) -> AppResult<Extinguisher> {
        sqlx::query_as::<_, Extinguisher>(
            r#"
            UPDATE extinguishers
            SET manufacturer_name = $1, supplier_name = $2, serial_number = $3,
                purchase_date = $4, extinguisher_type = $5, is_active = $6,
                assigned_box_id = $7, updated_at = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&extinguisher.manufacturer_name)
        .bind(&extinguisher.supplier_name)
        .bind(&extinguisher.serial_number)
        .bind(extinguisher.purchase_date)
        .bind(extinguisher.extinguisher_type)
        .bind(extinguisher.is_active)
        .bind(extinguisher.assigned_box_id)
        .bind(Utc::now())
        .bind(extinguisher.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Extinguisher {} not found", extinguisher.id)))
    }
}
