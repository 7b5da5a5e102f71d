//! Maintenance ticket and note models
//!
//! Only the record shapes exist; no ticket workflow is implemented yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{TicketState, TicketType};

/// Maintenance or inspection work item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type: TicketType,
    pub ticket_state: TicketState,
    pub title: String,
    pub description: String,
    pub assigned_user_id: Option<i32>,
    pub related_extinguisher_id: Option<i32>,
    pub related_box_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create ticket request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTicket {
    #[serde(default)]
    pub ticket_type: TicketType,
    pub title: String,
    pub description: String,
    pub related_extinguisher_id: Option<i32>,
    pub related_box_id: Option<i32>,
}

/// Ticket state change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTicketState {
    pub ticket_state: TicketState,
}

/// Free-text annotation on a ticket
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Note {
    pub id: i32,
    pub content: String,
    pub ticket_id: Option<i32>,
    pub note_created_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
