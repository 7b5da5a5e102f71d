//! Login endpoints

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::User};

use super::AuthenticatedUser;

/// OAuth2 password form; `username` carries the email
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Exchange email and password for an access token
#[utoipa::path(
    post,
    path = "/login/access-token",
    tag = "login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect email or password"),
        (status = 403, description = "Inactive user")
    )
)]
pub async fn access_token(
    State(state): State<crate::AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let access_token = state
        .services
        .users
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Return the user the token belongs to
#[utoipa::path(
    post,
    path = "/login/test-token",
    tag = "login",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = User),
        (status = 401, description = "Invalid or expired token")
    )
)]
pub async fn test_token(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
