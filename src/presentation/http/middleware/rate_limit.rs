// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type LoginRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit for the login endpoint: a burst of 5, then one attempt
/// every 2 seconds.
pub fn login_rate_limit_layer() -> Option<LoginRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(2);
    builder.burst_size(5);
    builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .map(GovernorLayer::new)
}
