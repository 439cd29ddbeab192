// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitSettings;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter. Returns `None` when the settings cannot form a quota.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.per_second);
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
