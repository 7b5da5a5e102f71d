//! User model and related types

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::UserType;
use crate::error::{AppError, AppResult};

/// Full user model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row to insert; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub user_type: UserType,
}

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(
        email(message = "Invalid email format"),
        length(max = 64, message = "Email must be at most 64 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
    #[validate(length(max = 32, message = "First name must be at most 32 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 32, message = "Last name must be at most 32 characters"))]
    pub last_name: Option<String>,
    pub user_type: Option<UserType>,
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
}

impl CreateUser {
    pub fn into_new_user(self, hashed_password: String) -> NewUser {
        NewUser {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            hashed_password,
            is_active: self.is_active.unwrap_or(true),
            is_admin: self.is_admin.unwrap_or(false),
            user_type: self.user_type.unwrap_or_default(),
        }
    }
}

/// Full update request (admin only). Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(
        email(message = "Invalid email format"),
        length(max = 64, message = "Email must be at most 64 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 32, message = "First name must be at most 32 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 32, message = "Last name must be at most 32 characters"))]
    pub last_name: Option<String>,
    /// New plaintext password; `null` is rejected
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
    pub user_type: Option<UserType>,
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
            && self.user_type.is_none()
            && self.is_active.is_none()
            && self.is_admin.is_none()
    }

    pub fn new_password(&self) -> AppResult<Option<&str>> {
        checked_password(&self.password)
    }

    /// Merge the present fields into `user`.
    pub fn merge_into(self, user: &mut User, hashed_password: Option<String>) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(hash) = hashed_password {
            user.hashed_password = hash;
        }
        if let Some(user_type) = self.user_type {
            user.user_type = user_type;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
    }
}

/// Update own profile request (for authenticated users)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfile {
    /// New plaintext password; `null` is rejected
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Option<String>>,
    #[validate(length(max = 32, message = "First name must be at most 32 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 32, message = "Last name must be at most 32 characters"))]
    pub last_name: Option<String>,
}

impl UpdateProfile {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }

    pub fn new_password(&self) -> AppResult<Option<&str>> {
        checked_password(&self.password)
    }

    pub fn merge_into(self, user: &mut User, hashed_password: Option<String>) {
        if let Some(first_name) = self.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(hash) = hashed_password {
            user.hashed_password = hash;
        }
    }
}

fn checked_password(field: &Option<Option<String>>) -> AppResult<Option<&str>> {
    match field {
        None => Ok(None),
        Some(None) => Err(AppError::BadRequest("Password cannot be null".to_string())),
        Some(Some(password)) if password.is_empty() => {
            Err(AppError::Validation("Password must not be empty".to_string()))
        }
        Some(Some(password)) => Ok(Some(password.as_str())),
    }
}

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id as a string
    pub sub: String,
    pub exp: i64,
}

impl TokenClaims {
    /// Create a signed JWT token
    pub fn create_token(
        &self,
        secret: &str,
        algorithm: Algorithm,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(
            &Header::new(algorithm),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token.
    ///
    /// Expiry is not checked here; callers compare `exp` against their own clock.
    pub fn from_token(
        token: &str,
        secret: &str,
        algorithm: Algorithm,
    ) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        let token_data = jsonwebtoken::decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> User {
        let at = Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap();
        User {
            id: 7,
            email: "linda.park@example.com".to_string(),
            first_name: Some("Linda".to_string()),
            last_name: Some("Park".to_string()),
            hashed_password: "$argon2id$old".to_string(),
            is_active: true,
            is_admin: false,
            user_type: UserType::Manager,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let mut merged = user();
        let patch = UpdateUser {
            last_name: Some("Bates".to_string()),
            is_admin: Some(true),
            ..Default::default()
        };
        patch.merge_into(&mut merged, None);

        let original = user();
        assert_eq!(merged.last_name.as_deref(), Some("Bates"));
        assert!(merged.is_admin);
        assert_eq!(merged.email, original.email);
        assert_eq!(merged.first_name, original.first_name);
        assert_eq!(merged.hashed_password, original.hashed_password);
        assert_eq!(merged.user_type, original.user_type);
        assert_eq!(merged.is_active, original.is_active);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = UpdateUser::default();
        assert!(patch.is_empty());

        let mut merged = user();
        patch.clone().merge_into(&mut merged, None);
        patch.merge_into(&mut merged, None);
        assert_eq!(merged, user());
    }

    #[test]
    fn null_password_is_rejected() {
        let patch: UpdateProfile = serde_json::from_str(r#"{"password": null}"#).unwrap();
        assert!(!patch.is_empty());
        assert!(matches!(patch.new_password(), Err(AppError::BadRequest(_))));

        let patch: UpdateProfile = serde_json::from_str(r#"{"first_name": "Linda"}"#).unwrap();
        assert_eq!(patch.new_password().unwrap(), None);

        let patch: UpdateUser = serde_json::from_str(r#"{"password": "s3cret"}"#).unwrap();
        assert_eq!(patch.new_password().unwrap(), Some("s3cret"));

        let patch: UpdateUser = serde_json::from_str(r#"{"password": ""}"#).unwrap();
        assert!(matches!(patch.new_password(), Err(AppError::Validation(_))));
    }

    #[test]
    fn profile_patch_cannot_touch_role_fields() {
        let patch: UpdateProfile =
            serde_json::from_str(r#"{"last_name": "Park", "is_admin": true, "email": "x@y.z"}"#)
                .unwrap();
        let mut merged = user();
        patch.merge_into(&mut merged, None);
        assert!(!merged.is_admin);
        assert_eq!(merged.email, "linda.park@example.com");
    }

    #[test]
    fn create_defaults() {
        let input: CreateUser =
            serde_json::from_str(r#"{"email": "a@b.co", "password": "pw"}"#).unwrap();
        let new_user = input.into_new_user("hash".to_string());
        assert!(new_user.is_active);
        assert!(!new_user.is_admin);
        assert_eq!(new_user.user_type, UserType::User);
    }

    #[test]
    fn serialized_user_omits_password_hash() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["user_type"], "manager");
    }
}
