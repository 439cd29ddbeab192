// src/application/commands/lead_magnets/delete.rs
use super::LeadMagnetCommandService;
use crate::{
    application::{
        dto::CallerIdentity,
        error::{ApplicationError, ApplicationResult},
    },
    domain::lead_magnet::LeadMagnetId,
};

pub struct DeleteLeadMagnetCommand {
    pub id: Option<String>,
}

impl LeadMagnetCommandService {
    pub async fn delete_lead_magnet(
        &self,
        actor: &CallerIdentity,
        command: DeleteLeadMagnetCommand,
    ) -> ApplicationResult<()> {
        let id = command
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("No id provided"))?;
        let id = LeadMagnetId::new(id)?;

        self.load_owned(actor, &id).await?;
        self.write_repo.delete(&id).await?;

        tracing::info!(lead_magnet_id = %id, user_id = %actor.id, "lead magnet deleted");
        Ok(())
    }
}
