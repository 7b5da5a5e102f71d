//! Caller resolution and role checks
//!
//! A request resolves its bearer token to a stored user, then passes
//! `require_active` and, for admin operations, `require_admin`, in that
//! order. The checks are pure predicates.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::User,
    repository::UserStore,
};

use super::credentials::CredentialService;

#[derive(Clone)]
pub struct AuthGate {
    users: Arc<dyn UserStore>,
    credentials: CredentialService,
}

impl AuthGate {
    pub fn new(users: Arc<dyn UserStore>, credentials: CredentialService) -> Self {
        Self { users, credentials }
    }

    /// Resolve a bearer token to the user it was issued for
    pub async fn resolve_caller(&self, token: &str) -> AppResult<User> {
        let user_id = self.credentials.validate_token(token)?;
        self.users
            .users_get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User was not found".to_string()))
    }
}

pub fn require_active(user: &User) -> AppResult<&User> {
    if user.is_active {
        Ok(user)
    } else {
        Err(AppError::Authorization("User is inactive".to_string()))
    }
}

pub fn require_admin(user: &User) -> AppResult<&User> {
    if user.is_admin {
        Ok(user)
    } else {
        Err(AppError::Authorization("User is not admin".to_string()))
    }
}

/// Active check followed by the admin check
pub fn require_active_admin(user: &User) -> AppResult<&User> {
    require_active(user).and_then(require_admin)
}
