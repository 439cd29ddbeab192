// src/domain/lead_magnet/entity.rs
use crate::domain::lead_magnet::value_objects::{
    LeadMagnetContent, LeadMagnetId, LeadMagnetName, LeadMagnetSlug, LeadMagnetStatus,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct LeadMagnet {
    pub id: LeadMagnetId,
    pub user_id: UserId,
    pub name: LeadMagnetName,
    pub slug: Option<LeadMagnetSlug>,
    pub draft: LeadMagnetContent,
    pub published: LeadMagnetContent,
    pub status: LeadMagnetStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeadMagnet {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Snapshot the draft into the published fields. Drafts are left untouched.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = self.draft.clone();
        self.status = LeadMagnetStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: LeadMagnetSlug, now: DateTime<Utc>) {
        self.slug = Some(slug);
        self.updated_at = now;
    }

    pub fn set_name(&mut self, name: LeadMagnetName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }

    pub fn set_draft(&mut self, draft: LeadMagnetContent, now: DateTime<Utc>) {
        self.draft = draft;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewLeadMagnet {
    pub user_id: UserId,
    pub name: LeadMagnetName,
    pub slug: LeadMagnetSlug,
    pub draft: LeadMagnetContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishedSnapshot {
    pub content: LeadMagnetContent,
    pub published_at: DateTime<Utc>,
}

/// Column-level change set. `original_updated_at` guards against lost updates.
#[derive(Debug, Clone)]
pub struct LeadMagnetUpdate {
    pub id: LeadMagnetId,
    pub name: Option<LeadMagnetName>,
    pub slug: Option<LeadMagnetSlug>,
    pub draft: Option<LeadMagnetContent>,
    pub published: Option<PublishedSnapshot>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeadMagnetUpdate {
    pub const fn new(id: LeadMagnetId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            draft: None,
            published: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_name(mut self, name: LeadMagnetName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: LeadMagnetSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_draft(mut self, draft: LeadMagnetContent) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_published(mut self, content: LeadMagnetContent, published_at: DateTime<Utc>) -> Self {
        self.published = Some(PublishedSnapshot {
            content,
            published_at,
        });
        self
    }

    pub const fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.draft.is_none() && self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> LeadMagnetContent {
        LeadMagnetContent {
            title: "Hi".into(),
            subtitle: "sub".into(),
            body: "body".into(),
            prompt: "prompt".into(),
            first_question: "question?".into(),
            email_capture: "Get it by email".into(),
        }
    }

    fn sample() -> LeadMagnet {
        let created = Utc::now();
        LeadMagnet {
            id: LeadMagnetId::new("abc").unwrap(),
            user_id: UserId::new("user_1").unwrap(),
            name: LeadMagnetName::new("Hi").unwrap(),
            slug: None,
            draft: draft(),
            published: LeadMagnetContent::default(),
            status: LeadMagnetStatus::Draft,
            published_at: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn publish_copies_draft_and_stamps_time() {
        let mut magnet = sample();
        let now = magnet.created_at + Duration::seconds(30);
        magnet.publish(now);

        assert_eq!(magnet.published, draft());
        assert_eq!(magnet.draft, draft());
        assert_eq!(magnet.status, LeadMagnetStatus::Published);
        assert_eq!(magnet.published_at, Some(now));
        assert_eq!(magnet.updated_at, now);
    }

    #[test]
    fn republish_overwrites_previous_snapshot() {
        let mut magnet = sample();
        let first = magnet.created_at;
        magnet.publish(first);

        let mut edited = draft();
        edited.body = "second revision".into();
        let later = first + Duration::minutes(5);
        magnet.set_draft(edited.clone(), later);
        magnet.publish(later);

        assert_eq!(magnet.published.body, "second revision");
        assert_eq!(magnet.published_at, Some(later));
    }

    #[test]
    fn ownership_compares_user_ids() {
        let magnet = sample();
        assert!(magnet.is_owned_by(&UserId::new("user_1").unwrap()));
        assert!(!magnet.is_owned_by(&UserId::new("user_2").unwrap()));
    }

    #[test]
    fn empty_update_has_no_columns() {
        let magnet = sample();
        let update = LeadMagnetUpdate::new(magnet.id.clone(), magnet.updated_at);
        assert!(update.is_empty());
        assert!(!update.with_slug(LeadMagnetSlug::new("hi").unwrap()).is_empty());
    }
}
