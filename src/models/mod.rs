//! Data models for the extinguisher inventory

pub mod enums;
pub mod extinguisher;
pub mod storage_box;
pub mod ticket;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use enums::{FireClass, TicketState, TicketType, UserType};
pub use extinguisher::Extinguisher;
pub use storage_box::StorageBox;
pub use ticket::{Note, Ticket};
pub use user::User;

/// Page size used when a listing does not specify one
pub const DEFAULT_LIMIT: i64 = 100;

/// Offset/limit pagination query
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of records to skip (default: 0)
    pub offset: Option<i64>,
    /// Maximum number of records to return (default: 100)
    pub limit: Option<i64>,
}

/// Validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Apply defaults and reject negative values
    pub fn resolve(self) -> AppResult<Page> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if offset < 0 || limit < 0 {
            return Err(AppError::BadRequest(
                "offset and limit must be non-negative".to_string(),
            ));
        }
        Ok(Page { offset, limit })
    }
}
