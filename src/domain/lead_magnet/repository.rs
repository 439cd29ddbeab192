// src/domain/lead_magnet/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::lead_magnet::entity::{LeadMagnet, LeadMagnetUpdate, NewLeadMagnet};
use crate::domain::lead_magnet::value_objects::{LeadMagnetId, LeadMagnetSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait LeadMagnetWriteRepository: Send + Sync {
    /// Persist a new record; the store assigns the id.
    async fn insert(&self, lead_magnet: NewLeadMagnet) -> DomainResult<LeadMagnet>;
    async fn update(&self, update: LeadMagnetUpdate) -> DomainResult<LeadMagnet>;
    async fn delete(&self, id: &LeadMagnetId) -> DomainResult<()>;
}

#[async_trait]
pub trait LeadMagnetReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &LeadMagnetId) -> DomainResult<Option<LeadMagnet>>;
    /// Slugs are only unique per owner, so lookups are always owner-scoped.
    async fn find_by_owner_and_slug(
        &self,
        user_id: &UserId,
        slug: &LeadMagnetSlug,
    ) -> DomainResult<Option<LeadMagnet>>;
}
