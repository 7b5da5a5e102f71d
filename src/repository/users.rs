//! Users repository for database operations

use async_trait::async_trait;
use chrono::Utc;

use super::{Repository, UserStore};
use crate::{
    error::{AppError, AppResult},
    models::{user::NewUser, Page, User},
};

#[async_trait]
impl UserStore for Repository {
    async fn users_list(&self, page: Page) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn users_get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn users_get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn users_email_exists(&self, email: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id != $2)")
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    async fn users_create(&self, user: &NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, first_name, last_name, hashed_password, is_active, is_admin, user_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.hashed_password)
        .bind(user.is_active)
        .bind(user.is_admin)
        .bind(user.user_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn users_update(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $1, first_name = $2, last_name = $3, hashed_password = $4,
                is_active = $5, is_admin = $6, user_type = $7, updated_at = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.hashed_password)
        .bind(user.is_active)
        .bind(user.is_admin)
        .bind(user.user_type)
        .bind(Utc::now())
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user.id)))
    }
}
