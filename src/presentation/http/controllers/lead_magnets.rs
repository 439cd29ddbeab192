// src/presentation/http/controllers/lead_magnets.rs
use crate::application::commands::lead_magnets::{
    CreateLeadMagnetCommand, DeleteLeadMagnetCommand, DraftFields, PublishLeadMagnetCommand,
    UpdateLeadMagnetCommand,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, QueryParams};
use crate::presentation::http::responses::{DeleteResponse, LeadMagnetResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    pub draft_title: Option<String>,
    pub draft_subtitle: Option<String>,
    pub draft_body: Option<String>,
    pub draft_prompt: Option<String>,
    pub draft_first_question: Option<String>,
    pub draft_email_capture: Option<String>,
}

impl From<DraftPayload> for DraftFields {
    fn from(payload: DraftPayload) -> Self {
        Self {
            title: payload.draft_title,
            subtitle: payload.draft_subtitle,
            body: payload.draft_body,
            prompt: payload.draft_prompt,
            first_question: payload.draft_first_question,
            email_capture: payload.draft_email_capture,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadMagnetRequest {
    /// Rejected when present; ids are assigned by the server.
    pub id: Option<String>,
    pub name: Option<String>,
    /// Seeds `draftTitle` and the slug when those are absent.
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(flatten)]
    pub draft: DraftPayload,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadMagnetRequest {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(flatten)]
    pub draft: DraftPayload,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishLeadMagnetRequest {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteLeadMagnetParams {
    pub id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/lead-magnet",
    request_body = CreateLeadMagnetRequest,
    responses(
        (status = 201, description = "Lead magnet created.", body = LeadMagnetResponse),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No caller identity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug taken concurrently.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Lead magnets"
)]
pub async fn create_lead_magnet(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
    JsonBody(payload): JsonBody<CreateLeadMagnetRequest>,
) -> HttpResult<(StatusCode, Json<LeadMagnetResponse>)> {
    let command = CreateLeadMagnetCommand {
        id: payload.id,
        name: payload.name,
        title: payload.title,
        slug: payload.slug,
        draft: payload.draft.into(),
    };

    let created = state
        .services
        .lead_magnet_commands
        .create_lead_magnet(&caller, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(LeadMagnetResponse::new(
            "Successfully handled lead magnet change!",
            created,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/lead-magnet",
    request_body = UpdateLeadMagnetRequest,
    responses(
        (status = 200, description = "Lead magnet updated.", body = LeadMagnetResponse),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No caller identity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller does not own the lead magnet.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Lead magnet not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification or slug clash.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Lead magnets"
)]
pub async fn update_lead_magnet(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
    JsonBody(payload): JsonBody<UpdateLeadMagnetRequest>,
) -> HttpResult<Json<LeadMagnetResponse>> {
    let command = UpdateLeadMagnetCommand {
        id: payload.id,
        user_id: payload.user_id,
        name: payload.name,
        title: payload.title,
        slug: payload.slug,
        draft: payload.draft.into(),
    };

    let updated = state
        .services
        .lead_magnet_commands
        .update_lead_magnet(&caller, command)
        .await
        .into_http()?;

    Ok(Json(LeadMagnetResponse::new(
        "Successfully handled lead magnet change!",
        updated,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/lead-magnet",
    params(DeleteLeadMagnetParams),
    responses(
        (status = 202, description = "Lead magnet deleted.", body = DeleteResponse),
        (status = 400, description = "No id provided.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No caller identity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller does not own the lead magnet.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Lead magnet not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Lead magnets"
)]
pub async fn delete_lead_magnet(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
    QueryParams(params): QueryParams<DeleteLeadMagnetParams>,
) -> HttpResult<(StatusCode, Json<DeleteResponse>)> {
    state
        .services
        .lead_magnet_commands
        .delete_lead_magnet(&caller, DeleteLeadMagnetCommand { id: params.id })
        .await
        .into_http()?;

    Ok((
        StatusCode::ACCEPTED,
        Json(DeleteResponse {
            message: "Successfully deleted lead magnet".into(),
            success: true,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/lead-magnet/publish",
    request_body = PublishLeadMagnetRequest,
    responses(
        (status = 200, description = "Draft copied to the published fields.", body = LeadMagnetResponse),
        (status = 400, description = "Missing id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No caller identity.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller does not own the lead magnet.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Lead magnet not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Lead magnets"
)]
pub async fn publish_lead_magnet(
    Extension(state): Extension<HttpState>,
    Authenticated(caller): Authenticated,
    JsonBody(payload): JsonBody<PublishLeadMagnetRequest>,
) -> HttpResult<Json<LeadMagnetResponse>> {
    let published = state
        .services
        .lead_magnet_commands
        .publish_lead_magnet(&caller, PublishLeadMagnetCommand { id: payload.id })
        .await
        .into_http()?;

    Ok(Json(
        LeadMagnetResponse::new("Successfully published lead magnet!", published).succeeded(),
    ))
}
