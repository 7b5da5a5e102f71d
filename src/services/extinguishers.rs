//! Extinguisher service
//!
//! Extinguishers always live in a box. A create that targets a missing box
//! lands in the warehouse box instead of failing, and soft deletion parks the
//! unit there as well. The warehouse is looked up by its `box_size` marker
//! each time it is needed.

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        extinguisher::{CreateExtinguisher, UpdateExtinguisher},
        Extinguisher, FireClass, Pagination, StorageBox, User,
    },
    repository::{BoxStore, ExtinguisherStore},
};

use super::gate;

#[derive(Clone)]
pub struct ExtinguishersService {
    extinguishers: Arc<dyn ExtinguisherStore>,
    boxes: Arc<dyn BoxStore>,
}

impl ExtinguishersService {
    pub fn new(extinguishers: Arc<dyn ExtinguisherStore>, boxes: Arc<dyn BoxStore>) -> Self {
        Self {
            extinguishers,
            boxes,
        }
    }

    pub async fn list(&self, caller: &User, pagination: Pagination) -> AppResult<Vec<Extinguisher>> {
        gate::require_active(caller)?;
        let page = pagination.resolve()?;
        self.extinguishers.extinguishers_list(page).await
    }

    pub async fn list_by_type(
        &self,
        caller: &User,
        extinguisher_type: FireClass,
        pagination: Pagination,
    ) -> AppResult<Vec<Extinguisher>> {
        gate::require_active(caller)?;
        let page = pagination.resolve()?;
        self.extinguishers
            .extinguishers_list_by_type(extinguisher_type, page)
            .await
    }

    pub async fn get_by_id(&self, caller: &User, id: i32) -> AppResult<Extinguisher> {
        gate::require_active(caller)?;
        self.extinguishers
            .extinguishers_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Extinguisher {} not found", id)))
    }

    pub(crate) async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.extinguishers.extinguishers_get_by_id(id).await?.is_some())
    }

    /// Fire classes present in the inventory
    pub async fn types(&self, caller: &User) -> AppResult<Vec<FireClass>> {
        gate::require_active(caller)?;
        self.extinguishers.extinguishers_types().await
    }

    pub async fn create(
        &self,
        caller: &User,
        data: CreateExtinguisher,
        target_box_id: i32,
    ) -> AppResult<Extinguisher> {
        gate::require_active(caller)?;
        data.validate()?;
        self.assign_and_create(&data, target_box_id).await
    }

    /// Insert into `target_box_id`, or into the warehouse when that box does not exist
    pub(crate) async fn assign_and_create(
        &self,
        data: &CreateExtinguisher,
        target_box_id: i32,
    ) -> AppResult<Extinguisher> {
        let box_id = match self.boxes.boxes_get_by_id(target_box_id).await? {
            Some(storage_box) => storage_box.id,
            None => {
                let warehouse = self.warehouse().await?;
                tracing::warn!(
                    "Box {} does not exist, assigning extinguisher {} to warehouse box {}",
                    target_box_id,
                    data.serial_number,
                    warehouse.id
                );
                warehouse.id
            }
        };

        let extinguisher = self.extinguishers.extinguishers_create(data, box_id).await?;
        tracing::info!("Created extinguisher {} in box {}", extinguisher.id, box_id);
        Ok(extinguisher)
    }

    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        patch: UpdateExtinguisher,
    ) -> AppResult<Extinguisher> {
        gate::require_active(caller)?;
        patch.validate()?;
        let mut extinguisher = self
            .extinguishers
            .extinguishers_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Extinguisher {} not found", id)))?;

        if patch.is_empty() {
            return Ok(extinguisher);
        }

        patch.merge_into(&mut extinguisher);
        self.extinguishers.extinguishers_update(&extinguisher).await
    }

    /// Deactivate and return to the warehouse. `None` when the id is unknown.
    ///
    /// Repeating the call on a parked extinguisher returns it unchanged
    /// without writing.
    pub async fn soft_deactivate(&self, caller: &User, id: i32) -> AppResult<Option<Extinguisher>> {
        gate::require_active(caller)?;
        let Some(mut extinguisher) = self.extinguishers.extinguishers_get_by_id(id).await? else {
            return Ok(None);
        };

        let warehouse = self.warehouse().await?;
        if !extinguisher.is_active && extinguisher.assigned_box_id == warehouse.id {
            return Ok(Some(extinguisher));
        }

        extinguisher.is_active = false;
        extinguisher.assigned_box_id = warehouse.id;
        let updated = self.extinguishers.extinguishers_update(&extinguisher).await?;
        tracing::info!("Extinguisher {} deactivated by user {}", updated.id, caller.id);
        Ok(Some(updated))
    }

    async fn warehouse(&self) -> AppResult<StorageBox> {
        self.boxes
            .boxes_find_warehouse()
            .await?
            .ok_or_else(|| AppError::Internal("No warehouse box has been seeded".to_string()))
    }
}
