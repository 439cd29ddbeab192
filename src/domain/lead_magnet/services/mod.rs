// src/domain/lead_magnet/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::lead_magnet::repository::LeadMagnetReadRepository;
use crate::domain::lead_magnet::value_objects::{LeadMagnetId, LeadMagnetSlug};
use crate::domain::user::UserId;

/// Used when neither a title nor a name yields any slug characters.
pub const DEFAULT_SLUG: &str = "default-slug";

/// Domain service producing slugs that are unique within one owner's records.
///
/// The lookup-then-write sequence is not atomic: two requests racing on the same
/// base slug can both see it as free. The `(user_id, slug)` unique constraint in
/// the store rejects the loser, which surfaces as a conflict.
pub struct LeadMagnetSlugService {
    read_repo: Arc<dyn LeadMagnetReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl LeadMagnetSlugService {
    pub fn new(
        read_repo: Arc<dyn LeadMagnetReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Normalise free text (a title or a name) into a base slug.
    pub fn derive_slug(&self, source: &str) -> DomainResult<LeadMagnetSlug> {
        let base = self.generator.slugify(source);
        if base.is_empty() {
            LeadMagnetSlug::new(DEFAULT_SLUG)
        } else {
            LeadMagnetSlug::new(base)
        }
    }

    /// Try `base`, `base-1`, `base-2`, ... until one is free for `owner`.
    ///
    /// A match on `ignore_id` counts as free so a record keeps its own slug.
    pub async fn resolve_unique_slug(
        &self,
        base: &LeadMagnetSlug,
        owner: &UserId,
        ignore_id: Option<&LeadMagnetId>,
    ) -> DomainResult<LeadMagnetSlug> {
        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            match self
                .read_repo
                .find_by_owner_and_slug(owner, &candidate)
                .await?
            {
                Some(existing) if ignore_id.is_some_and(|id| *id == existing.id) => {
                    return Ok(candidate);
                }
                Some(_) => {
                    candidate = base.with_suffix(counter);
                    counter += 1;
                }
                None => return Ok(candidate),
            }
        }
    }
}
