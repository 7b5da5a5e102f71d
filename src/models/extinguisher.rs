//! Extinguisher model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::FireClass;

/// A tracked physical extinguisher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Extinguisher {
    pub id: i32,
    pub manufacturer_name: String,
    pub supplier_name: String,
    pub serial_number: String,
    pub purchase_date: DateTime<Utc>,
    pub extinguisher_type: FireClass,
    /// Cleared on soft delete
    pub is_active: bool,
    pub assigned_box_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create extinguisher request. The target box comes from the route.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExtinguisher {
    #[validate(length(max = 64, message = "Manufacturer name must be at most 64 characters"))]
    pub manufacturer_name: String,
    #[validate(length(max = 64, message = "Supplier name must be at most 64 characters"))]
    pub supplier_name: String,
    pub serial_number: String,
    /// Defaults to now
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub extinguisher_type: FireClass,
    pub is_active: Option<bool>,
}

/// Update extinguisher request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateExtinguisher {
    #[validate(length(max = 64, message = "Manufacturer name must be at most 64 characters"))]
    pub manufacturer_name: Option<String>,
    #[validate(length(max = 64, message = "Supplier name must be at most 64 characters"))]
    pub supplier_name: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub extinguisher_type: Option<FireClass>,
    pub is_active: Option<bool>,
}

impl UpdateExtinguisher {
    pub fn is_empty(&self) -> bool {
        self.manufacturer_name.is_none()
            && self.supplier_name.is_none()
            && self.serial_number.is_none()
            && self.purchase_date.is_none()
            && self.extinguisher_type.is_none()
            && self.is_active.is_none()
    }

    pub fn merge_into(self, extinguisher: &mut Extinguisher) {
        if let Some(manufacturer_name) = self.manufacturer_name {
            extinguisher.manufacturer_name = manufacturer_name;
        }
        if let Some(supplier_name) = self.supplier_name {
            extinguisher.supplier_name = supplier_name;
        }
        if let Some(serial_number) = self.serial_number {
            extinguisher.serial_number = serial_number;
        }
        if let Some(purchase_date) = self.purchase_date {
            extinguisher.purchase_date = purchase_date;
        }
        if let Some(extinguisher_type) = self.extinguisher_type {
            extinguisher.extinguisher_type = extinguisher_type;
        }
        if let Some(is_active) = self.is_active {
            extinguisher.is_active = is_active;
        }
    }
}
