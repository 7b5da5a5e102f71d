//! API handlers for the extinguisher REST endpoints

pub mod boxes;
pub mod extinguishers;
pub mod health;
pub mod login;
pub mod openapi;
pub mod tickets;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::User, AppState};

/// Caller resolved from the bearer token. Role checks happen in the services.
pub struct AuthenticatedUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let user = state.services.gate.resolve_caller(token).await?;
        Ok(AuthenticatedUser(user))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Login
        .route("/login/access-token", post(login::access_token))
        .route("/login/test-token", post(login::test_token))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/me", put(users::update_me))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Boxes
        .route("/boxes", get(boxes::list_boxes).post(boxes::create_box))
        .route(
            "/boxes/:id",
            get(boxes::get_box).put(boxes::update_box).delete(boxes::delete_box),
        )
        .route("/boxes/:id/extinguishers", post(extinguishers::create_extinguisher))
        // Extinguishers
        .route("/extinguishers", get(extinguishers::list_extinguishers))
        .route("/extinguishers/types", get(extinguishers::list_types))
        .route(
            "/extinguishers/by-type/:extinguisher_type",
            get(extinguishers::list_by_type),
        )
        .route(
            "/extinguishers/:id",
            get(extinguishers::get_extinguisher)
                .put(extinguishers::update_extinguisher)
                .delete(extinguishers::delete_extinguisher),
        )
        // Tickets
        .route("/tickets", get(tickets::list_tickets).post(tickets::create_ticket))
        .route("/tickets/:id/state", put(tickets::update_ticket_state))
        .with_state(state);

    Router::new()
        .route("/", get(health::root))
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        // Outermost layer is applied last: cors wraps trace.
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
