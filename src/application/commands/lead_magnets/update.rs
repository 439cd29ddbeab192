// src/application/commands/lead_magnets/update.rs
use super::{
    LeadMagnetCommandService,
    draft::{DraftFields, provided_slug, validate_slug_input},
};
use crate::{
    application::{
        dto::{CallerIdentity, LeadMagnetDto},
        error::{ApplicationError, ApplicationResult},
        validation::{MAX_TEXT_LEN, ValidationErrors},
    },
    domain::{
        lead_magnet::{LeadMagnet, LeadMagnetId, LeadMagnetName, LeadMagnetSlug, LeadMagnetUpdate},
        user::UserId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateLeadMagnetCommand {
    pub id: Option<String>,
    /// Owner as claimed by the client; must match the caller.
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub draft: DraftFields,
}

impl UpdateLeadMagnetCommand {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match self.id.as_deref() {
            None => errors.push("id", "is required"),
            Some(id) if id.trim().is_empty() => errors.push("id", "cannot be empty"),
            Some(_) => {}
        }
        match self.user_id.as_deref() {
            None => errors.push("userId", "is required"),
            Some(user_id) if user_id.trim().is_empty() => errors.push("userId", "cannot be empty"),
            Some(_) => {}
        }

        errors.check_not_blank("name", self.name.as_deref());
        errors.check_not_blank("title", self.title.as_deref());
        errors.check_max_len("name", self.name.as_deref(), MAX_TEXT_LEN);
        errors.check_max_len("title", self.title.as_deref(), MAX_TEXT_LEN);

        validate_slug_input(&mut errors, self.slug.as_deref());
        self.draft.validate_into(&mut errors);

        errors.into_result()
    }
}

impl LeadMagnetCommandService {
    pub async fn update_lead_magnet(
        &self,
        actor: &CallerIdentity,
        command: UpdateLeadMagnetCommand,
    ) -> ApplicationResult<LeadMagnetDto> {
        command.validate()?;

        let UpdateLeadMagnetCommand {
            id,
            user_id,
            name,
            title,
            slug,
            mut draft,
        } = command;

        let claimed_owner = UserId::new(user_id.unwrap_or_default())?;
        if claimed_owner != actor.id {
            return Err(ApplicationError::forbidden(
                "userId does not match the authenticated user",
            ));
        }

        let id = LeadMagnetId::new(id.unwrap_or_default())?;
        // The stored owner is authoritative; the payload's userId is only a claim.
        let mut magnet = self.load_owned(actor, &id).await?;

        let now = self.clock.now();
        let mut update = LeadMagnetUpdate::new(id.clone(), magnet.updated_at);

        let slug_source = title.clone().or_else(|| name.clone());
        if let Some(new_name) = name.or_else(|| title.clone()) {
            let new_name = LeadMagnetName::new(new_name)?;
            magnet.set_name(new_name.clone(), now);
            update = update.with_name(new_name);
        }

        if draft.title.is_none() {
            draft.title = title;
        }
        if !draft.is_empty() {
            let merged = draft.apply_to(magnet.draft.clone());
            magnet.set_draft(merged.clone(), now);
            update = update.with_draft(merged);
        }

        if let Some(new_slug) = self
            .next_slug(&magnet, provided_slug(slug), slug_source.as_deref())
            .await?
        {
            magnet.set_slug(new_slug.clone(), now);
            update = update.with_slug(new_slug);
        }

        if update.is_empty() {
            return Ok(magnet.into());
        }
        update.set_updated_at(magnet.updated_at);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            lead_magnet_id = %updated.id,
            user_id = %updated.user_id,
            "lead magnet updated"
        );
        Ok(updated.into())
    }

    /// An explicit slug wins; otherwise a renamed record gets a slug derived
    /// from its new title or name. Returns `None` when the slug is unchanged.
    async fn next_slug(
        &self,
        magnet: &LeadMagnet,
        explicit: Option<String>,
        derived_from: Option<&str>,
    ) -> ApplicationResult<Option<LeadMagnetSlug>> {
        let base = match (explicit, derived_from) {
            (Some(explicit), _) => LeadMagnetSlug::new(explicit)?,
            (None, Some(source)) => self.slug_service.derive_slug(source)?,
            (None, None) => return Ok(None),
        };

        let resolved = self
            .slug_service
            .resolve_unique_slug(&base, &magnet.user_id, Some(&magnet.id))
            .await?;

        if magnet.slug.as_ref() == Some(&resolved) {
            Ok(None)
        } else {
            Ok(Some(resolved))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_user_id_are_required() {
        let errors = UpdateLeadMagnetCommand::default().validate().unwrap_err();
        assert!(errors.has_field("id"));
        assert!(errors.has_field("userId"));
    }

    #[test]
    fn partial_payload_is_valid() {
        let command = UpdateLeadMagnetCommand {
            id: Some("abc".into()),
            user_id: Some("user_1".into()),
            draft: DraftFields {
                body: Some("new body".into()),
                ..DraftFields::default()
            },
            ..UpdateLeadMagnetCommand::default()
        };
        assert!(command.validate().is_ok());
    }
}
