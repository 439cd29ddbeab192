use crate::domain::lead_magnet::{LeadMagnet, LeadMagnetStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadMagnetDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub slug: Option<String>,
    #[schema(value_type = String, example = "draft")]
    pub status: LeadMagnetStatus,
    pub draft_title: String,
    pub draft_subtitle: String,
    pub draft_body: String,
    pub draft_prompt: String,
    pub draft_first_question: String,
    pub draft_email_capture: String,
    pub published_title: String,
    pub published_subtitle: String,
    pub published_body: String,
    pub published_prompt: String,
    pub published_first_question: String,
    pub published_email_capture: String,
    #[serde(with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<LeadMagnet> for LeadMagnetDto {
    fn from(magnet: LeadMagnet) -> Self {
        let LeadMagnet {
            id,
            user_id,
            name,
            slug,
            draft,
            published,
            status,
            published_at,
            created_at,
            updated_at,
        } = magnet;

        Self {
            id: id.into_inner(),
            user_id: user_id.into_inner(),
            name: name.into_inner(),
            slug: slug.map(|s| s.into_inner()),
            status,
            draft_title: draft.title,
            draft_subtitle: draft.subtitle,
            draft_body: draft.body,
            draft_prompt: draft.prompt,
            draft_first_question: draft.first_question,
            draft_email_capture: draft.email_capture,
            published_title: published.title,
            published_subtitle: published.subtitle,
            published_body: published.body,
            published_prompt: published.prompt,
            published_first_question: published.first_question,
            published_email_capture: published.email_capture,
            published_at,
            created_at,
            updated_at,
        }
    }
}
