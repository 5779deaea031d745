//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging (TraceLayer)
//! - Body size limit and global timeout, driven by Config

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use axum::response::IntoResponse;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;

/// Apply HTTP-level middleware to the given Router.
///
/// Body limit and timeout come from `Config`
/// (`REQUEST_BODY_LIMIT_BYTES`, `REQUEST_TIMEOUT_SECONDS`).
pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT.into_response()
            } else {
                AppError::Internal.into_response()
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(config.request_body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use tower::ServiceExt;

    use crate::config::AppEnv;

    fn config_with_body_limit(limit: usize) -> Config {
        Config {
            addr: "0.0.0.0:0".parse().unwrap(),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            admin_jwt_secret: "test-secret".to_string(),
            jwt_leeway_seconds: 0,
            request_body_limit_bytes: limit,
            request_timeout_seconds: 30,
        }
    }

    fn echo_app(limit: usize) -> Router {
        let router = Router::new().route("/echo", post(|body: String| async move { body }));
        apply(router, &config_with_body_limit(limit))
    }

    fn post_body(size: usize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from("x".repeat(size)))
            .unwrap()
    }

    #[tokio::test]
    async fn configured_body_limit_is_enforced() {
        let response = echo_app(16).oneshot(post_body(64)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn body_under_the_configured_limit_passes() {
        let response = echo_app(16).oneshot(post_body(8)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
