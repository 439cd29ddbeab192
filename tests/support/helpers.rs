// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use lead_magnet_api::application::ports::{
    identity::IdentityProvider, time::Clock, util::SlugGenerator,
};
use lead_magnet_api::application::services::ApplicationServices;
use lead_magnet_api::domain::lead_magnet::{LeadMagnetReadRepository, LeadMagnetWriteRepository};
use lead_magnet_api::infrastructure::util::DefaultSlugGenerator;
use lead_magnet_api::presentation::http::state::HttpState;
use serde_json::Value;

pub fn build_services(store: &Arc<mocks::InMemoryLeadMagnetStore>) -> Arc<ApplicationServices> {
    build_services_with_repos(store.clone(), store.clone())
}

pub fn build_services_with_repos(
    write_repo: Arc<dyn LeadMagnetWriteRepository>,
    read_repo: Arc<dyn LeadMagnetReadRepository>,
) -> Arc<ApplicationServices> {
    let identity: Arc<dyn IdentityProvider> = Arc::new(mocks::StaticIdentityProvider);
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        write_repo, read_repo, identity, clock, slugger,
    ))
}

pub fn build_test_state(store: &Arc<mocks::InMemoryLeadMagnetStore>) -> HttpState {
    HttpState {
        services: build_services(store),
    }
}

/// Router over the given store, without the per-IP rate limiter (`oneshot`
/// requests carry no peer address).
pub fn make_test_router(store: &Arc<mocks::InMemoryLeadMagnetStore>) -> axum::Router {
    let origins = vec!["http://localhost:3000".to_string()];
    lead_magnet_api::presentation::http::routes::build_router(build_test_state(store), &origins)
}

/// Same as [`make_test_router`] but with the read side swapped out.
pub fn make_test_router_with_reads(
    store: &Arc<mocks::InMemoryLeadMagnetStore>,
    read_repo: Arc<dyn LeadMagnetReadRepository>,
) -> axum::Router {
    let origins = vec!["http://localhost:3000".to_string()];
    let state = HttpState {
        services: build_services_with_repos(store.clone(), read_repo),
    };
    lead_magnet_api::presentation::http::routes::build_router(state, &origins)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Split a response into its status and parsed JSON body.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert the error envelope: `{ error, message, success: false }`.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "unexpected body: {json}");
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(
        json["error"].as_str(),
        expected_status.canonical_reason(),
        "unexpected error field in {json}"
    );
    assert!(!json["message"].is_null(), "expected a message in {json}");
    json
}
