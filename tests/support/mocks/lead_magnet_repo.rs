// tests/support/mocks/lead_magnet_repo.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Duration;
use lead_magnet_api::domain::errors::{DomainError, DomainResult};
use lead_magnet_api::domain::lead_magnet::{
    LeadMagnet, LeadMagnetContent, LeadMagnetId, LeadMagnetReadRepository, LeadMagnetSlug,
    LeadMagnetStatus, LeadMagnetUpdate, LeadMagnetWriteRepository, NewLeadMagnet,
};
use lead_magnet_api::domain::user::UserId;

/// In-memory store backing both repository traits.
///
/// Mirrors the Postgres adapter: ids are assigned on insert, `(owner, slug)`
/// pairs are unique and updates are rejected when `updated_at` moved on.
#[derive(Default)]
pub struct InMemoryLeadMagnetStore {
    records: Mutex<HashMap<String, LeadMagnet>>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryLeadMagnetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = LeadMagnet>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.lock().unwrap();
            for record in records {
                map.insert(record.id.as_str().to_string(), record);
            }
        }
        store
    }

    /// Number of insert/update/delete calls that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<LeadMagnet> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn slug_taken(
        map: &HashMap<String, LeadMagnet>,
        owner: &UserId,
        slug: &LeadMagnetSlug,
        except: Option<&LeadMagnetId>,
    ) -> bool {
        map.values().any(|record| {
            &record.user_id == owner
                && record.slug.as_ref() == Some(slug)
                && except.is_none_or(|id| *id != record.id)
        })
    }
}

#[async_trait]
impl LeadMagnetWriteRepository for InMemoryLeadMagnetStore {
    async fn insert(&self, new: NewLeadMagnet) -> DomainResult<LeadMagnet> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.records.lock().unwrap();
        if Self::slug_taken(&map, &new.user_id, &new.slug, None) {
            return Err(DomainError::Conflict("slug already in use".into()));
        }

        let seq = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = LeadMagnet {
            id: LeadMagnetId::new(format!("lm-{seq}"))?,
            user_id: new.user_id,
            name: new.name,
            slug: Some(new.slug),
            draft: new.draft,
            published: LeadMagnetContent::default(),
            status: LeadMagnetStatus::Draft,
            published_at: None,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        map.insert(record.id.as_str().to_string(), record.clone());
        Ok(record)
    }

    async fn update(&self, update: LeadMagnetUpdate) -> DomainResult<LeadMagnet> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut map = self.records.lock().unwrap();

        if let Some(slug) = update.slug.as_ref() {
            let taken = map
                .get(update.id.as_str())
                .is_some_and(|record| Self::slug_taken(&map, &record.user_id, slug, Some(&update.id)));
            if taken {
                return Err(DomainError::Conflict("slug already in use".into()));
            }
        }

        let record = map
            .get_mut(update.id.as_str())
            .filter(|record| record.updated_at == update.original_updated_at)
            .ok_or_else(|| {
                DomainError::Conflict("lead magnet was modified concurrently, please retry".into())
            })?;

        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(slug) = update.slug {
            record.slug = Some(slug);
        }
        if let Some(draft) = update.draft {
            record.draft = draft;
        }
        if let Some(snapshot) = update.published {
            record.published = snapshot.content;
            record.status = LeadMagnetStatus::Published;
            record.published_at = Some(snapshot.published_at);
        }
        record.updated_at = update.updated_at;
        Ok(record.clone())
    }

    async fn delete(&self, id: &LeadMagnetId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Lead magnet not found"))
    }
}

#[async_trait]
impl LeadMagnetReadRepository for InMemoryLeadMagnetStore {
    async fn find_by_id(&self, id: &LeadMagnetId) -> DomainResult<Option<LeadMagnet>> {
        Ok(self.get(id.as_str()))
    }

    async fn find_by_owner_and_slug(
        &self,
        user_id: &UserId,
        slug: &LeadMagnetSlug,
    ) -> DomainResult<Option<LeadMagnet>> {
        let map = self.records.lock().unwrap();
        Ok(map
            .values()
            .find(|record| &record.user_id == user_id && record.slug.as_ref() == Some(slug))
            .cloned())
    }
}

/// Reads that never see an existing slug, so the write is the first place a
/// duplicate `(owner, slug)` pair can be caught.
pub struct SlugBlindReads(pub Arc<InMemoryLeadMagnetStore>);

#[async_trait]
impl LeadMagnetReadRepository for SlugBlindReads {
    async fn find_by_id(&self, id: &LeadMagnetId) -> DomainResult<Option<LeadMagnet>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_owner_and_slug(
        &self,
        _user_id: &UserId,
        _slug: &LeadMagnetSlug,
    ) -> DomainResult<Option<LeadMagnet>> {
        Ok(None)
    }
}

/// Reads that return records as they were a minute ago, as if another
/// request modified them after this one loaded them.
pub struct StaleReads(pub Arc<InMemoryLeadMagnetStore>);

#[async_trait]
impl LeadMagnetReadRepository for StaleReads {
    async fn find_by_id(&self, id: &LeadMagnetId) -> DomainResult<Option<LeadMagnet>> {
        Ok(self.0.find_by_id(id).await?.map(|mut record| {
            record.updated_at -= Duration::minutes(1);
            record
        }))
    }

    async fn find_by_owner_and_slug(
        &self,
        user_id: &UserId,
        slug: &LeadMagnetSlug,
    ) -> DomainResult<Option<LeadMagnet>> {
        self.0.find_by_owner_and_slug(user_id, slug).await
    }
}
