//! Storage box service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        storage_box::{CreateBox, StorageBoxDetails, UpdateBox},
        Pagination, StorageBox, User,
    },
    repository::{BoxStore, ExtinguisherStore},
};

use super::gate;

#[derive(Clone)]
pub struct BoxesService {
    boxes: Arc<dyn BoxStore>,
    extinguishers: Arc<dyn ExtinguisherStore>,
}

impl BoxesService {
    pub fn new(boxes: Arc<dyn BoxStore>, extinguishers: Arc<dyn ExtinguisherStore>) -> Self {
        Self {
            boxes,
            extinguishers,
        }
    }

    pub async fn list(&self, caller: &User, pagination: Pagination) -> AppResult<Vec<StorageBox>> {
        gate::require_active(caller)?;
        let page = pagination.resolve()?;
        self.boxes.boxes_list(page).await
    }

    /// Box with its assigned extinguishers
    pub async fn get_by_id(&self, caller: &User, id: i32) -> AppResult<StorageBoxDetails> {
        gate::require_active(caller)?;
        let storage_box = self
            .boxes
            .boxes_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Box {} not found", id)))?;
        let extinguishers = self.extinguishers.extinguishers_list_by_box(id).await?;

        Ok(StorageBoxDetails {
            storage_box,
            extinguishers,
        })
    }

    pub async fn create(&self, caller: &User, data: CreateBox) -> AppResult<StorageBox> {
        gate::require_active(caller)?;
        data.validate()?;
        let storage_box = self.boxes.boxes_create(&data).await?;
        tracing::info!("Created box {} ({})", storage_box.id, storage_box.box_size);
        Ok(storage_box)
    }

    pub async fn update(&self, caller: &User, id: i32, patch: UpdateBox) -> AppResult<StorageBox> {
        gate::require_active(caller)?;
        patch.validate()?;
        let mut storage_box = self
            .boxes
            .boxes_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Box {} not found", id)))?;

        if patch.is_empty() {
            return Ok(storage_box);
        }

        patch.merge_into(&mut storage_box);
        self.boxes.boxes_update(&storage_box).await
    }

    pub async fn delete(&self, caller: &User, id: i32) -> AppResult<()> {
        gate::require_active(caller)?;
        Err(AppError::NotImplemented(format!(
            "Deleting boxes is not supported (box {})",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::storage_box::WAREHOUSE_BOX_SIZE,
        repository::{MockBoxStore, MockExtinguisherStore},
        services::gate::tests::user,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn storage_box(id: i32, box_size: &str) -> StorageBox {
        let now = Utc::now();
        StorageBox {
            id,
            box_size: box_size.to_string(),
            building: "Administration".to_string(),
            room: format!("24{}", id),
            location_description: Some(format!("Near room 24{}", id)),
            is_damaged: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(boxes: MockBoxStore) -> BoxesService {
        BoxesService::new(Arc::new(boxes), Arc::new(MockExtinguisherStore::new()))
    }

    #[tokio::test]
    async fn regular_users_can_list() {
        let mut boxes = MockBoxStore::new();
        boxes
            .expect_boxes_list()
            .returning(|_| Ok(vec![storage_box(1, WAREHOUSE_BOX_SIZE), storage_box(2, "standard")]));

        let listed = service(boxes)
            .list(&user(2, false), Pagination::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn update_checks_existence_before_writing() {
        let mut boxes = MockBoxStore::new();
        boxes.expect_boxes_get_by_id().with(eq(42)).returning(|_| Ok(None));
        boxes.expect_boxes_update().times(0);

        let patch = UpdateBox {
            is_damaged: Some(true),
            ..Default::default()
        };
        let err = service(boxes).update(&user(2, false), 42, patch).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_merges_patch() {
        let mut boxes = MockBoxStore::new();
        boxes
            .expect_boxes_get_by_id()
            .returning(|id| Ok(Some(storage_box(id, "standard"))));
        boxes
            .expect_boxes_update()
            .withf(|b| b.is_damaged && b.room == "243")
            .times(1)
            .returning(|b| Ok(b.clone()));

        let patch = UpdateBox {
            is_damaged: Some(true),
            ..Default::default()
        };
        let updated = service(boxes).update(&user(2, false), 3, patch).await.unwrap();
        assert!(updated.is_damaged);
    }

    #[tokio::test]
    async fn inactive_caller_is_forbidden() {
        let mut caller = user(2, false);
        caller.is_active = false;
        let err = service(MockBoxStore::new())
            .create(&caller, CreateBox::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn oversized_fields_are_rejected_before_writing() {
        let mut boxes = MockBoxStore::new();
        boxes.expect_boxes_create().times(0);
        boxes.expect_boxes_get_by_id().times(0);
        boxes.expect_boxes_update().times(0);
        let boxes = service(boxes);

        let data = CreateBox {
            box_size: Some("x".repeat(40)),
            ..Default::default()
        };
        let err = boxes.create(&user(2, false), data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let patch = UpdateBox {
            room: Some("r".repeat(33)),
            ..Default::default()
        };
        let err = boxes.update(&user(2, false), 3, patch).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn store_write_failure_propagates() {
        let mut boxes = MockBoxStore::new();
        boxes
            .expect_boxes_get_by_id()
            .returning(|id| Ok(Some(storage_box(id, "standard"))));
        boxes
            .expect_boxes_update()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let patch = UpdateBox {
            building: Some("Science".to_string()),
            ..Default::default()
        };
        let err = service(boxes).update(&user(2, false), 3, patch).await.unwrap_err();
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn delete_is_not_implemented() {
        let err = service(MockBoxStore::new())
            .delete(&user(1, true), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotImplemented(_)));
    }
}
