//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, rate limiting and timeouts.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use club_common::{AppError, CorsConfig, RateLimitConfig};
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests taking longer than this are answered with 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply middleware stack with rate limiting and configured CORS
///
/// # Errors
/// Returns `AppError::Config` if the rate limit settings are unusable
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    // One global bucket: a token every 1000/rps ms, up to `burst` at once
    let replenish_ms = 1000 / u64::from(rate_limit_config.requests_per_second.max(1));
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms.max(1))
            .burst_size(rate_limit_config.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| AppError::Config("Invalid rate limit configuration".to_string()))?,
    );

    // Layers wrap in reverse order of addition, so requests pass:
    // RejectionBody -> RateLimit -> RequestID -> Trace -> Timeout -> CORS -> Handler
    let router = router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer_from_config(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        // Rate limiting
        .layer(GovernorLayer {
            config: governor_conf,
        })
        // JSON bodies for limiter and timeout rejections (outermost)
        .layer(map_response(rejection_body));

    Ok(router)
}

/// Replace the plain 429 and empty 503 bodies of the limiter and timeout layers
///
/// Responses that already carry JSON pass through untouched.
async fn rejection_body(response: Response) -> Response {
    let error = match response.status() {
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        StatusCode::SERVICE_UNAVAILABLE => ApiError::Timeout,
        _ => return response,
    };

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    // Keep limiter headers such as retry-after
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);

    let mut rewritten = error.into_response();
    rewritten.headers_mut().extend(parts.headers);
    rewritten
}

/// Create CORS layer from configuration
fn create_cors_layer_from_config(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // In production, only allow configured origins
    // In development, allow any origin if no origins are configured
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use club_common::AppConfig;
    use club_db::InMemoryStore;
    use club_service::ServiceContext;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(
            ServiceContext::in_memory(InMemoryStore::new()),
            AppConfig::in_memory(),
        )
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        let rate_limit = RateLimitConfig {
            requests_per_second: 10,
            burst: 0,
        };
        let result =
            apply_middleware_with_config(Router::new(), &rate_limit, &CorsConfig::default(), false);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_valid_config_builds() {
        let rate_limit = RateLimitConfig {
            requests_per_second: 5000,
            burst: 100,
        };
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        };
        assert!(apply_middleware_with_config(Router::new(), &rate_limit, &cors, true).is_ok());
    }

    #[tokio::test]
    async fn test_rate_limited_response_is_json() {
        let rate_limit = RateLimitConfig {
            requests_per_second: 1,
            burst: 1,
        };
        let router = Router::new().route("/ping", get(|| async { "pong" }));
        let app = apply_middleware_with_config(router, &rate_limit, &CorsConfig::default(), false)
            .unwrap()
            .with_state(state());

        let first = app
            .clone()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = json_body(second).await;
        assert_eq!(body["code"], "RATE_LIMITED");
        assert_eq!(body["message"], "Too many requests");
    }

    #[tokio::test]
    async fn test_empty_unavailable_becomes_timeout_body() {
        let response = StatusCode::SERVICE_UNAVAILABLE.into_response();
        let response = rejection_body(response).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["code"], "REQUEST_TIMEOUT");
    }

    #[tokio::test]
    async fn test_json_responses_pass_through() {
        let response = (
            StatusCode::SERVICE_UNAVAILABLE,
            axum::Json(serde_json::json!({ "status": "not_ready" })),
        )
            .into_response();
        let response = rejection_body(response).await;
        assert_eq!(json_body(response).await["status"], "not_ready");
    }
}
