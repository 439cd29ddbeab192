// src/application/commands/lead_magnets/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::lead_magnet::{
        LeadMagnetReadRepository, LeadMagnetWriteRepository, services::LeadMagnetSlugService,
    },
};

pub struct LeadMagnetCommandService {
    pub(super) write_repo: Arc<dyn LeadMagnetWriteRepository>,
    pub(super) read_repo: Arc<dyn LeadMagnetReadRepository>,
    pub(super) slug_service: Arc<LeadMagnetSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl LeadMagnetCommandService {
    pub fn new(
        write_repo: Arc<dyn LeadMagnetWriteRepository>,
        read_repo: Arc<dyn LeadMagnetReadRepository>,
        slug_service: Arc<LeadMagnetSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
