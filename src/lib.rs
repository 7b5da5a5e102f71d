//! Fire extinguisher inventory server
//!
//! REST JSON API for tracking users, storage boxes and the extinguishers
//! kept in them, with bearer token authentication and admin/active checks.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
