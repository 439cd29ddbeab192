// src/application/commands/lead_magnets/create.rs
use super::{
    LeadMagnetCommandService,
    draft::{DraftFields, provided_slug, validate_slug_input},
};
use crate::{
    application::{
        dto::{CallerIdentity, LeadMagnetDto},
        error::ApplicationResult,
        validation::{MAX_TEXT_LEN, ValidationErrors},
    },
    domain::lead_magnet::{LeadMagnetContent, LeadMagnetName, LeadMagnetSlug, NewLeadMagnet},
};

#[derive(Debug, Clone, Default)]
pub struct CreateLeadMagnetCommand {
    /// Never accepted on create; carried only so it can be rejected.
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub draft: DraftFields,
}

impl CreateLeadMagnetCommand {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.id.is_some() {
            errors.push("id", "must not be provided when creating a lead magnet");
        }

        errors.check_not_blank("name", self.name.as_deref());
        errors.check_not_blank("title", self.title.as_deref());
        if self.name.is_none() && self.title.is_none() {
            errors.push("name", "either name or title is required");
        }
        errors.check_max_len("name", self.name.as_deref(), MAX_TEXT_LEN);
        errors.check_max_len("title", self.title.as_deref(), MAX_TEXT_LEN);

        validate_slug_input(&mut errors, self.slug.as_deref());
        self.draft.validate_into(&mut errors);

        errors.into_result()
    }
}

impl LeadMagnetCommandService {
    pub async fn create_lead_magnet(
        &self,
        actor: &CallerIdentity,
        command: CreateLeadMagnetCommand,
    ) -> ApplicationResult<LeadMagnetDto> {
        command.validate()?;

        let CreateLeadMagnetCommand {
            id: _,
            name,
            title,
            slug,
            mut draft,
        } = command;

        // Slug derivation prefers the title, matching what readers see first.
        let slug_source = title.clone().or_else(|| name.clone()).unwrap_or_default();
        let name = LeadMagnetName::new(name.or_else(|| title.clone()).unwrap_or_default())?;
        if draft.title.is_none() {
            draft.title = title;
        }

        let base_slug = match provided_slug(slug) {
            Some(explicit) => LeadMagnetSlug::new(explicit)?,
            None => self.slug_service.derive_slug(&slug_source)?,
        };
        let slug = self
            .slug_service
            .resolve_unique_slug(&base_slug, &actor.id, None)
            .await?;

        let now = self.clock.now();
        let new_magnet = NewLeadMagnet {
            user_id: actor.id.clone(),
            name,
            slug,
            draft: draft.apply_to(LeadMagnetContent::default()),
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_magnet).await?;
        tracing::info!(
            lead_magnet_id = %created.id,
            user_id = %created.user_id,
            slug = created.slug.as_ref().map(LeadMagnetSlug::as_str).unwrap_or_default(),
            "lead magnet created"
        );
        Ok(created.into())
    }
}
