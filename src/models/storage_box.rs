//! Storage box model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::extinguisher::Extinguisher;

/// `box_size` marker of the default box that receives orphaned extinguishers
pub const WAREHOUSE_BOX_SIZE: &str = "warehouse";
pub const DEFAULT_BOX_SIZE: &str = "standard";
pub const DEFAULT_BUILDING: &str = "Admin Building";
pub const DEFAULT_ROOM: &str = "Missing room data";

/// Physical storage unit for extinguishers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StorageBox {
    pub id: i32,
    /// Free-form size label; "warehouse" marks the default box
    pub box_size: String,
    pub building: String,
    pub room: String,
    pub location_description: Option<String>,
    pub is_damaged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Box with the extinguishers currently assigned to it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StorageBoxDetails {
    #[serde(flatten)]
    pub storage_box: StorageBox,
    pub extinguishers: Vec<Extinguisher>,
}

/// Create box request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBox {
    #[validate(length(max = 16, message = "Box size must be at most 16 characters"))]
    pub box_size: Option<String>,
    #[validate(length(max = 32, message = "Building must be at most 32 characters"))]
    pub building: Option<String>,
    #[validate(length(max = 32, message = "Room must be at most 32 characters"))]
    pub room: Option<String>,
    #[validate(length(max = 256, message = "Location description must be at most 256 characters"))]
    pub location_description: Option<String>,
    pub is_damaged: Option<bool>,
}

/// Update box request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBox {
    #[validate(length(max = 16, message = "Box size must be at most 16 characters"))]
    pub box_size: Option<String>,
    #[validate(length(max = 32, message = "Building must be at most 32 characters"))]
    pub building: Option<String>,
    #[validate(length(max = 32, message = "Room must be at most 32 characters"))]
    pub room: Option<String>,
    #[validate(length(max = 256, message = "Location description must be at most 256 characters"))]
    pub location_description: Option<String>,
    pub is_damaged: Option<bool>,
}

impl UpdateBox {
    pub fn is_empty(&self) -> bool {
        self.box_size.is_none()
            && self.building.is_none()
            && self.room.is_none()
            && self.location_description.is_none()
            && self.is_damaged.is_none()
    }

    pub fn merge_into(self, storage_box: &mut StorageBox) {
        if let Some(box_size) = self.box_size {
            storage_box.box_size = box_size;
        }
        if let Some(building) = self.building {
            storage_box.building = building;
        }
        if let Some(room) = self.room {
            storage_box.room = room;
        }
        if let Some(location_description) = self.location_description {
            storage_box.location_description = Some(location_description);
        }
        if let Some(is_damaged) = self.is_damaged {
            storage_box.is_damaged = is_damaged;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_present_fields() {
        let now = Utc::now();
        let mut storage_box = StorageBox {
            id: 3,
            box_size: DEFAULT_BOX_SIZE.to_string(),
            building: "Administration".to_string(),
            room: "243".to_string(),
            location_description: Some("Near room 243".to_string()),
            is_damaged: false,
            created_at: now,
            updated_at: now,
        };
        let before = storage_box.clone();

        UpdateBox {
            is_damaged: Some(true),
            ..Default::default()
        }
        .merge_into(&mut storage_box);

        assert!(storage_box.is_damaged);
        assert_eq!(storage_box.room, before.room);
        assert_eq!(storage_box.location_description, before.location_description);
    }
}
