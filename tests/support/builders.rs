// tests/support/builders.rs
use super::mocks::fixed_now;
use lead_magnet_api::domain::lead_magnet::*;
use lead_magnet_api::domain::user::UserId;

pub struct LeadMagnetBuilder {
    id: String,
    user_id: String,
    name: String,
    slug: Option<String>,
    draft: LeadMagnetContent,
}

impl LeadMagnetBuilder {
    pub fn new(id: &str, user_id: &str) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: "Test Magnet".into(),
            slug: Some("test-magnet".into()),
            draft: LeadMagnetContent {
                title: "Test Magnet".into(),
                subtitle: "A subtitle".into(),
                body: "Body text".into(),
                prompt: "You are a helpful assistant".into(),
                first_question: "What do you need?".into(),
                email_capture: "Send me the results".into(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn without_slug(mut self) -> Self {
        self.slug = None;
        self
    }

    pub fn draft_title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = title.into();
        self
    }

    pub fn build(self) -> LeadMagnet {
        LeadMagnet {
            id: LeadMagnetId::new(self.id).unwrap(),
            user_id: UserId::new(self.user_id).unwrap(),
            name: LeadMagnetName::new(self.name).unwrap(),
            slug: self.slug.map(|slug| LeadMagnetSlug::new(slug).unwrap()),
            draft: self.draft,
            published: LeadMagnetContent::default(),
            status: LeadMagnetStatus::Draft,
            published_at: None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
