//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{boxes, extinguishers, health, login, tickets, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fire Extinguisher Management API",
        version = "0.1.0",
        description = "Inventory of users, storage boxes and fire extinguishers",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&BearerAuth),
    paths(
        // Health
        health::health_check,
        // Login
        login::access_token,
        login::test_token,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::update_me,
        users::delete_user,
        // Boxes
        boxes::list_boxes,
        boxes::get_box,
        boxes::create_box,
        boxes::update_box,
        boxes::delete_box,
        // Extinguishers
        extinguishers::list_extinguishers,
        extinguishers::list_by_type,
        extinguishers::list_types,
        extinguishers::get_extinguisher,
        extinguishers::create_extinguisher,
        extinguishers::update_extinguisher,
        extinguishers::delete_extinguisher,
        // Tickets
        tickets::list_tickets,
        tickets::create_ticket,
        tickets::update_ticket_state,
    ),
    components(
        schemas(
            // Login
            login::LoginForm,
            login::TokenResponse,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::UpdateProfile,
            crate::models::UserType,
            // Boxes
            crate::models::storage_box::StorageBox,
            crate::models::storage_box::StorageBoxDetails,
            crate::models::storage_box::CreateBox,
            crate::models::storage_box::UpdateBox,
            // Extinguishers
            crate::models::extinguisher::Extinguisher,
            crate::models::extinguisher::CreateExtinguisher,
            crate::models::extinguisher::UpdateExtinguisher,
            crate::models::FireClass,
            // Tickets
            crate::models::ticket::Ticket,
            crate::models::ticket::CreateTicket,
            crate::models::ticket::UpdateTicketState,
            crate::models::ticket::Note,
            crate::models::TicketType,
            crate::models::TicketState,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "login", description = "Access tokens"),
        (name = "users", description = "User management"),
        (name = "boxes", description = "Storage box management"),
        (name = "extinguishers", description = "Extinguisher inventory"),
        (name = "tickets", description = "Maintenance tickets")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_bearer_scheme_and_routes() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(doc.paths.paths.contains_key("/extinguishers/{id}"));
        assert!(doc.paths.paths.contains_key("/login/access-token"));
    }
}
