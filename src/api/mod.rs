pub mod dtos;
pub mod handlers;

use axum::{Router, body::Body, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_passage, health::health_check),
    components(schemas(
        crate::passage::PassageResult,
        dtos::ErrorResponse,
        health::HealthResponse
    )),
    tags(
        (name = "passage", description = "Chapter text scraped from the upstream provider"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// All routes with request tracing and `x-request-id` propagation.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/passage/{book}/{chapter}", get(handlers::get_passage))
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or("-");
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
