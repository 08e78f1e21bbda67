use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{handle_panic, route_not_found};
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar) with the raw
///   document at `/api-docs/openapi.json`
/// - API routes merged at the root
/// - `Route Not Found` fallback for unknown paths and unsupported methods
/// - Panic catching (500 `Internal Server Error`)
/// - Common middleware (tracing, security headers, compression)
/// - CORS, only when `server_config.cors_allowed_origins` is non-empty
///
/// Health endpoints should be merged by the app using `health_router()`.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header
/// value.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, &ServerConfig::default())?;
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if server_config.cors_allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGIN not set, CORS layer disabled");
    } else {
        info!(
            "CORS configured with allowed origins: {}",
            server_config.cors_allowed_origins.join(",")
        );
        router = router.layer(create_cors_layer(&server_config.cors_allowed_origins)?);
    }

    // gzip, br, deflate, zstd based on Accept-Encoding
    Ok(router.layer(CompressionLayer::new()))
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// - Graceful shutdown on SIGINT/SIGTERM
/// - Cleanup future bounded by `shutdown_timeout`
/// - Errors logged before being returned
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// create_production_app(
///     router,
///     &config,
///     Duration::from_secs(30),
///     async move { info!("releasing resources") },
/// ).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test", version = "0.0.0"))]
    struct EmptyDoc;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    fn test_router() -> Router {
        let apis = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route("/boom", get(boom));
        create_router::<EmptyDoc>(apis, &ServerConfig::default()).unwrap()
    }

    async fn message_of(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["message"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_routes_are_served_at_root() {
        let response = test_router()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_route_not_found() {
        let response = test_router()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(message_of(response).await, "Route Not Found");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_route_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(message_of(response).await, "Route Not Found");
    }

    #[tokio::test]
    async fn test_panicking_handler_is_internal_error() {
        let response = test_router()
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_of(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins = vec!["bad\norigin".to_string()];
        assert!(create_router::<EmptyDoc>(Router::new(), &config).is_err());
    }
}
