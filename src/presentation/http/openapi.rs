// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::lead_magnets::create_lead_magnet,
        crate::presentation::http::controllers::lead_magnets::update_lead_magnet,
        crate::presentation::http::controllers::lead_magnets::delete_lead_magnet,
        crate::presentation::http::controllers::lead_magnets::publish_lead_magnet,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::responses::StatusResponse,
            crate::presentation::http::responses::LeadMagnetResponse,
            crate::presentation::http::responses::DeleteResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::lead_magnets::CreateLeadMagnetRequest,
            crate::presentation::http::controllers::lead_magnets::UpdateLeadMagnetRequest,
            crate::presentation::http::controllers::lead_magnets::PublishLeadMagnetRequest,
            crate::application::dto::LeadMagnetDto,
            crate::application::validation::ValidationErrors,
            crate::application::validation::FieldError
        )
    ),
    tags(
        (name = "Lead magnets", description = "Create, edit, publish and delete lead magnets"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Lead Magnet API",
        description = "Draft, publish and manage lead magnets",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the OpenAPI document to `path` (pretty-printed JSON).
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_lead_magnet_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/lead-magnet"));
        assert!(paths.contains_key("/api/lead-magnet/publish"));
        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
