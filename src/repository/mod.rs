//! Repository layer for database operations
//!
//! Services talk to storage through the `*Store` traits; `Repository` is the
//! Postgres implementation of all of them.

pub mod boxes;
pub mod extinguishers;
pub mod users;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        extinguisher::CreateExtinguisher,
        storage_box::CreateBox,
        user::NewUser,
        Extinguisher, FireClass, Page, StorageBox, User,
    },
};

/// Persistence for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn users_list(&self, page: Page) -> AppResult<Vec<User>>;
    async fn users_get_by_id(&self, id: i32) -> AppResult<Option<User>>;
    async fn users_get_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Whether `email` is taken by a user other than `exclude_id`
    async fn users_email_exists(&self, email: &str, exclude_id: Option<i32>) -> AppResult<bool>;
    async fn users_create(&self, user: &NewUser) -> AppResult<User>;
    /// Persist every mutable column of `user` and return the refreshed row
    async fn users_update(&self, user: &User) -> AppResult<User>;
}

/// Persistence for storage boxes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoxStore: Send + Sync {
    async fn boxes_list(&self, page: Page) -> AppResult<Vec<StorageBox>>;
    async fn boxes_get_by_id(&self, id: i32) -> AppResult<Option<StorageBox>>;
    /// First box carrying the warehouse marker
    async fn boxes_find_warehouse(&self) -> AppResult<Option<StorageBox>>;
    async fn boxes_create(&self, data: &CreateBox) -> AppResult<StorageBox>;
    async fn boxes_update(&self, storage_box: &StorageBox) -> AppResult<StorageBox>;
}

/// Persistence for extinguishers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtinguisherStore: Send + Sync {
    async fn extinguishers_list(&self, page: Page) -> AppResult<Vec<Extinguisher>>;
    async fn extinguishers_list_by_type(
        &self,
        extinguisher_type: FireClass,
        page: Page,
    ) -> AppResult<Vec<Extinguisher>>;
    async fn extinguishers_list_by_box(&self, box_id: i32) -> AppResult<Vec<Extinguisher>>;
    async fn extinguishers_get_by_id(&self, id: i32) -> AppResult<Option<Extinguisher>>;
    /// Distinct fire classes currently stored
    async fn extinguishers_types(&self) -> AppResult<Vec<FireClass>>;
    async fn extinguishers_create(
        &self,
        data: &CreateExtinguisher,
        box_id: i32,
    ) -> AppResult<Extinguisher>;
    async fn extinguishers_update(&self, extinguisher: &Extinguisher) -> AppResult<Extinguisher>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
