//! Ticket endpoints (not available yet)

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        ticket::{CreateTicket, UpdateTicketState},
        Pagination, Ticket,
    },
};

use super::AuthenticatedUser;

#[utoipa::path(
    get,
    path = "/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(Pagination),
    responses(
        (status = 501, description = "Tickets are not available yet")
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = state.services.tickets.list(&caller, pagination).await?;
    Ok(Json(tickets))
}

#[utoipa::path(
    post,
    path = "/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    request_body = CreateTicket,
    responses(
        (status = 501, description = "Tickets are not available yet")
    )
)]
pub async fn create_ticket(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Json(input): Json<CreateTicket>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.create(&caller, input).await?;
    Ok(Json(ticket))
}

#[utoipa::path(
    put,
    path = "/tickets/{id}/state",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketState,
    responses(
        (status = 501, description = "Tickets are not available yet")
    )
)]
pub async fn update_ticket_state(
    State(state): State<crate::AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(input): Json<UpdateTicketState>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.update_state(&caller, id, input).await?;
    Ok(Json(ticket))
}
