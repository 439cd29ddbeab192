// src/application/commands/lead_magnets/publish.rs
use super::LeadMagnetCommandService;
use crate::{
    application::{
        dto::{CallerIdentity, LeadMagnetDto},
        error::ApplicationResult,
        validation::ValidationErrors,
    },
    domain::lead_magnet::{LeadMagnetId, LeadMagnetUpdate},
};

pub struct PublishLeadMagnetCommand {
    pub id: String,
}

impl PublishLeadMagnetCommand {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.id.trim().is_empty() {
            errors.push("id", "Id is required and cannot be empty");
        }
        errors.into_result()
    }
}

impl LeadMagnetCommandService {
    /// Snapshot the draft into the published fields and make the record public.
    ///
    /// A record without a slug gets one derived from its draft title.
    pub async fn publish_lead_magnet(
        &self,
        actor: &CallerIdentity,
        command: PublishLeadMagnetCommand,
    ) -> ApplicationResult<LeadMagnetDto> {
        command.validate()?;
        let id = LeadMagnetId::new(command.id)?;
        let mut magnet = self.load_owned(actor, &id).await?;
        let original_updated_at = magnet.updated_at;

        let now = self.clock.now();
        magnet.publish(now);

        let mut update = LeadMagnetUpdate::new(id, original_updated_at)
            .with_published(magnet.published.clone(), now);

        if magnet.slug.is_none() {
            let base = self.slug_service.derive_slug(&magnet.draft.title)?;
            let slug = self
                .slug_service
                .resolve_unique_slug(&base, &magnet.user_id, Some(&magnet.id))
                .await?;
            magnet.set_slug(slug.clone(), now);
            update = update.with_slug(slug);
        }
        update.set_updated_at(magnet.updated_at);

        let published = self.write_repo.update(update).await?;
        tracing::info!(
            lead_magnet_id = %published.id,
            user_id = %published.user_id,
            "lead magnet published"
        );
        Ok(published.into())
    }
}
