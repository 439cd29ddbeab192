// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::lead_magnets::LeadMagnetCommandService,
        dto::CallerIdentity,
        error::ApplicationError,
        ports::{identity::IdentityProvider, time::Clock, util::SlugGenerator},
    },
    domain::lead_magnet::{
        LeadMagnetReadRepository, LeadMagnetWriteRepository, services::LeadMagnetSlugService,
    },
};

pub struct ApplicationServices {
    pub lead_magnet_commands: Arc<LeadMagnetCommandService>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ApplicationServices {
    pub fn new(
        lead_magnet_write_repo: Arc<dyn LeadMagnetWriteRepository>,
        lead_magnet_read_repo: Arc<dyn LeadMagnetReadRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(LeadMagnetSlugService::new(
            Arc::clone(&lead_magnet_read_repo),
            Arc::clone(&slugger),
        ));

        let lead_magnet_commands = Arc::new(LeadMagnetCommandService::new(
            Arc::clone(&lead_magnet_write_repo),
            Arc::clone(&lead_magnet_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        Self {
            lead_magnet_commands,
            identity_provider,
        }
    }

    /// Resolve a raw bearer credential to a caller, failing with `Unauthorized`
    /// when the identity provider does not recognise it.
    pub async fn authenticate(&self, credential: &str) -> ApplicationResult<CallerIdentity> {
        self.identity_provider
            .resolve_current_user(credential)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("Unauthorized"))
    }
}
