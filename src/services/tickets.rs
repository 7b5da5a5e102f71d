//! Maintenance tickets
//!
//! The record shapes are stored but the workflow is not available yet;
//! every operation answers `NotImplemented` once the caller is admitted.

use crate::{
    error::{AppError, AppResult},
    models::{
        ticket::{CreateTicket, UpdateTicketState},
        Pagination, Ticket, User,
    },
};

use super::gate;

#[derive(Clone, Default)]
pub struct TicketsService;

impl TicketsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(&self, caller: &User, _pagination: Pagination) -> AppResult<Vec<Ticket>> {
        gate::require_active(caller)?;
        Err(not_implemented())
    }

    pub async fn create(&self, caller: &User, _data: CreateTicket) -> AppResult<Ticket> {
        gate::require_active(caller)?;
        Err(not_implemented())
    }

    pub async fn update_state(
        &self,
        caller: &User,
        _id: i32,
        _data: UpdateTicketState,
    ) -> AppResult<Ticket> {
        gate::require_active(caller)?;
        Err(not_implemented())
    }
}

fn not_implemented() -> AppError {
    AppError::NotImplemented("Tickets are not available yet".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gate::tests::user;

    #[tokio::test]
    async fn active_callers_get_not_implemented() {
        let err = TicketsService::new()
            .list(&user(2, false), Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotImplemented(_)));
    }

    #[tokio::test]
    async fn inactive_callers_are_refused_first() {
        let mut caller = user(2, false);
        caller.is_active = false;
        let err = TicketsService::new()
            .list(&caller, Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }
}
