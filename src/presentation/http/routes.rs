// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::lead_magnets, middleware::rate_limit::RateLimitLayer, openapi,
    responses::StatusResponse,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    build_router_with_rate_limiter(state, allowed_origins, None)
}

pub fn build_router_with_rate_limiter(
    state: HttpState,
    allowed_origins: &[String],
    rate_limiter: Option<RateLimitLayer>,
) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut api = Router::new()
        .route(
            "/api/lead-magnet",
            post(lead_magnets::create_lead_magnet)
                .put(lead_magnets::update_lead_magnet)
                .delete(lead_magnets::delete_lead_magnet),
        )
        .route(
            "/api/lead-magnet/publish",
            post(lead_magnets::publish_lead_magnet),
        );

    if let Some(limiter) = rate_limiter {
        api = api.layer(limiter);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
