// src/application/commands/lead_magnets/ownership.rs
use super::LeadMagnetCommandService;
use crate::{
    application::{
        dto::CallerIdentity,
        error::{ApplicationError, ApplicationResult},
    },
    domain::lead_magnet::{LeadMagnet, LeadMagnetId},
};

pub(super) fn ensure_owner(actor: &CallerIdentity, magnet: &LeadMagnet) -> ApplicationResult<()> {
    if magnet.is_owned_by(&actor.id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "lead magnet belongs to another user",
        ))
    }
}

impl LeadMagnetCommandService {
    pub(super) async fn load_owned(
        &self,
        actor: &CallerIdentity,
        id: &LeadMagnetId,
    ) -> ApplicationResult<LeadMagnet> {
        let magnet = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Lead magnet not found"))?;
        ensure_owner(actor, &magnet)?;
        Ok(magnet)
    }
}
