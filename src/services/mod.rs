//! Business logic services

pub mod boxes;
pub mod credentials;
pub mod extinguishers;
pub mod gate;
pub mod seed;
pub mod tickets;
pub mod users;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    repository::{BoxStore, ExtinguisherStore, UserStore},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub credentials: credentials::CredentialService,
    pub gate: gate::AuthGate,
    pub users: users::UsersService,
    pub boxes: boxes::BoxesService,
    pub extinguishers: extinguishers::ExtinguishersService,
    pub tickets: tickets::TicketsService,
    pub seed: seed::Seeder,
}

impl Services {
    /// Create all services on top of a single store
    pub fn new<S>(store: Arc<S>, auth_config: AuthConfig) -> Self
    where
        S: UserStore + BoxStore + ExtinguisherStore + 'static,
    {
        let users_store: Arc<dyn UserStore> = store.clone();
        let boxes_store: Arc<dyn BoxStore> = store.clone();
        let extinguishers_store: Arc<dyn ExtinguisherStore> = store;

        let credentials = credentials::CredentialService::new(auth_config);
        let extinguishers =
            extinguishers::ExtinguishersService::new(extinguishers_store.clone(), boxes_store.clone());

        Self {
            gate: gate::AuthGate::new(users_store.clone(), credentials.clone()),
            users: users::UsersService::new(users_store.clone(), credentials.clone()),
            boxes: boxes::BoxesService::new(boxes_store.clone(), extinguishers_store),
            seed: seed::Seeder::new(users_store, boxes_store, extinguishers.clone(), credentials.clone()),
            tickets: tickets::TicketsService::new(),
            extinguishers,
            credentials,
        }
    }
}
