//! User management and login

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        user::{CreateUser, UpdateProfile, UpdateUser},
        Pagination, User,
    },
    repository::UserStore,
};

use super::{credentials::CredentialService, gate};

#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
    credentials: CredentialService,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>, credentials: CredentialService) -> Self {
        Self { store, credentials }
    }

    /// Check an email/password pair. `None` when either is wrong.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.store.users_get_by_email(email).await? else {
            return Ok(None);
        };
        if !self.credentials.verify_password(password, &user.hashed_password) {
            return Ok(None);
        }
        Ok(Some(user))
    }

    /// Authenticate and issue an access token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self.authenticate(email, password).await?.ok_or_else(|| {
            tracing::warn!("Refused login for {}", email);
            AppError::Authentication("Incorrect email or password".to_string())
        })?;

        if !user.is_active {
            return Err(AppError::Authorization("Inactive user".to_string()));
        }

        self.credentials.issue_access_token(user.id)
    }

    pub async fn list(&self, caller: &User, pagination: Pagination) -> AppResult<Vec<User>> {
        gate::require_active_admin(caller)?;
        let page = pagination.resolve()?;
        self.store.users_list(page).await
    }

    pub async fn get_by_id(&self, caller: &User, id: i32) -> AppResult<User> {
        gate::require_active_admin(caller)?;
        self.store
            .users_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Create a new user (admin only)
    pub async fn create(&self, caller: &User, input: CreateUser) -> AppResult<User> {
        gate::require_active_admin(caller)?;
        input.validate()?;

        if self.store.users_email_exists(&input.email, None).await? {
            return Err(AppError::Conflict("User with this email already exists".to_string()));
        }

        let hashed_password = self.credentials.hash_password(&input.password)?;
        let user = self.store.users_create(&input.into_new_user(hashed_password)).await?;

        tracing::info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Partial update of any user (admin only)
    pub async fn update_by_admin(&self, caller: &User, id: i32, patch: UpdateUser) -> AppResult<User> {
        gate::require_active_admin(caller)?;
        patch.validate()?;
        let new_password = patch.new_password()?;

        let mut user = self
            .store
            .users_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        if patch.is_empty() {
            return Ok(user);
        }

        if let Some(ref email) = patch.email {
            if *email != user.email && self.store.users_email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict("User with this email already exists".to_string()));
            }
        }

        let hashed_password = new_password
            .map(|password| self.credentials.hash_password(password))
            .transpose()?;
        patch.merge_into(&mut user, hashed_password);

        let updated = self.store.users_update(&user).await?;
        tracing::info!("User {} updated by admin {}", updated.id, caller.id);
        Ok(updated)
    }

    /// Update the caller's own password and names
    pub async fn update_self(&self, caller: &User, patch: UpdateProfile) -> AppResult<User> {
        gate::require_active(caller)?;
        patch.validate()?;
        let new_password = patch.new_password()?;

        let mut user = self
            .store
            .users_get_by_id(caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User was not found".to_string()))?;

        if patch.is_empty() {
            return Ok(user);
        }

        let hashed_password = new_password
            .map(|password| self.credentials.hash_password(password))
            .transpose()?;
        patch.merge_into(&mut user, hashed_password);

        self.store.users_update(&user).await
    }

    /// Users are never physically deleted
    pub async fn delete(&self, caller: &User, id: i32) -> AppResult<()> {
        gate::require_active_admin(caller)?;
        Err(AppError::NotImplemented(format!(
            "Deleting users is not supported (user {})",
            id
        )))
    }
}
