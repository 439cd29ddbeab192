// src/infrastructure/repositories/postgres_lead_magnet.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead_magnet::{
    LeadMagnet, LeadMagnetContent, LeadMagnetId, LeadMagnetName, LeadMagnetReadRepository,
    LeadMagnetSlug, LeadMagnetStatus, LeadMagnetUpdate, LeadMagnetWriteRepository, NewLeadMagnet,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, name, slug, status, \
     draft_title, draft_subtitle, draft_body, draft_prompt, draft_first_question, draft_email_capture, \
     published_title, published_subtitle, published_body, published_prompt, published_first_question, published_email_capture, \
     published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresLeadMagnetWriteRepository {
    pool: PgPool,
}

impl PostgresLeadMagnetWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresLeadMagnetReadRepository {
    pool: PgPool,
}

impl PostgresLeadMagnetReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LeadMagnetRow {
    id: String,
    user_id: String,
    name: String,
    slug: Option<String>,
    status: String,
    draft_title: String,
    draft_subtitle: String,
    draft_body: String,
    draft_prompt: String,
    draft_first_question: String,
    draft_email_capture: String,
    published_title: String,
    published_subtitle: String,
    published_body: String,
    published_prompt: String,
    published_first_question: String,
    published_email_capture: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeadMagnetRow> for LeadMagnet {
    type Error = DomainError;

    fn try_from(row: LeadMagnetRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadMagnetId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            name: LeadMagnetName::new(row.name)?,
            slug: row.slug.map(LeadMagnetSlug::new).transpose()?,
            status: row.status.parse::<LeadMagnetStatus>()?,
            draft: LeadMagnetContent {
                title: row.draft_title,
                subtitle: row.draft_subtitle,
                body: row.draft_body,
                prompt: row.draft_prompt,
                first_question: row.draft_first_question,
                email_capture: row.draft_email_capture,
            },
            published: LeadMagnetContent {
                title: row.published_title,
                subtitle: row.published_subtitle,
                body: row.published_body,
                prompt: row.published_prompt,
                first_question: row.published_first_question,
                email_capture: row.published_email_capture,
            },
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_content(builder: &mut QueryBuilder<'_, Postgres>, prefix: &str, content: LeadMagnetContent) {
    let LeadMagnetContent {
        title,
        subtitle,
        body,
        prompt,
        first_question,
        email_capture,
    } = content;
    let columns = [
        ("title", title),
        ("subtitle", subtitle),
        ("body", body),
        ("prompt", prompt),
        ("first_question", first_question),
        ("email_capture", email_capture),
    ];
    for (column, value) in columns {
        builder.push(format!(", {prefix}_{column} = "));
        builder.push_bind(value);
    }
}

#[async_trait]
impl LeadMagnetWriteRepository for PostgresLeadMagnetWriteRepository {
    async fn insert(&self, lead_magnet: NewLeadMagnet) -> DomainResult<LeadMagnet> {
        let NewLeadMagnet {
            user_id,
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = lead_magnet;
        let id = Uuid::new_v4().to_string();

        let row = sqlx::query_as::<_, LeadMagnetRow>(&format!(
            "INSERT INTO lead_magnets (id, user_id, name, slug, status,
                 draft_title, draft_subtitle, draft_body, draft_prompt, draft_first_question, draft_email_capture,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(user_id.as_str())
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(LeadMagnetStatus::Draft.as_str())
        .bind(draft.title)
        .bind(draft.subtitle)
        .bind(draft.body)
        .bind(draft.prompt)
        .bind(draft.first_question)
        .bind(draft.email_capture)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        LeadMagnet::try_from(row)
    }

    async fn update(&self, update: LeadMagnetUpdate) -> DomainResult<LeadMagnet> {
        let LeadMagnetUpdate {
            id,
            name,
            slug,
            draft,
            published,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE lead_magnets SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(draft) = draft {
            push_content(&mut builder, "draft", draft);
        }

        if let Some(snapshot) = published {
            push_content(&mut builder, "published", snapshot.content);
            builder.push(", status = ");
            builder.push_bind(LeadMagnetStatus::Published.as_str());
            builder.push(", published_at = ");
            builder.push_bind(snapshot.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_str().to_owned());
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(format!(" RETURNING {COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<LeadMagnetRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::Conflict("lead magnet was modified concurrently, please retry".into())
        })?;

        LeadMagnet::try_from(row)
    }

    async fn delete(&self, id: &LeadMagnetId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM lead_magnets WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Lead magnet not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl LeadMagnetReadRepository for PostgresLeadMagnetReadRepository {
    async fn find_by_id(&self, id: &LeadMagnetId) -> DomainResult<Option<LeadMagnet>> {
        let row = sqlx::query_as::<_, LeadMagnetRow>(&format!(
            "SELECT {COLUMNS} FROM lead_magnets WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(LeadMagnet::try_from).transpose()
    }

    async fn find_by_owner_and_slug(
        &self,
        user_id: &UserId,
        slug: &LeadMagnetSlug,
    ) -> DomainResult<Option<LeadMagnet>> {
        let row = sqlx::query_as::<_, LeadMagnetRow>(&format!(
            "SELECT {COLUMNS} FROM lead_magnets WHERE user_id = $1 AND slug = $2"
        ))
        .bind(user_id.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(LeadMagnet::try_from).transpose()
    }
}
