use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::{
    api::dtos::{ErrorResponse, PassageQuery},
    app_state::AppState,
    passage::{PassageError, PassageRequest, PassageResult, lookup, parse_chapter},
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Passage not found")]
    NotFound,

    #[error("An error occurred while fetching the passage")]
    Internal(#[source] PassageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(source) => {
                error!(error = %source, "passage request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/passage/{book}/{chapter}",
    tag = "passage",
    params(
        ("book" = String, Path, description = "Book name, e.g. `Genesis` or `1 John`"),
        ("chapter" = String, Path, description = "Chapter number"),
        PassageQuery
    ),
    responses(
        (status = 200, description = "Verses of the chapter", body = PassageResult),
        (status = 400, description = "Path could not be decoded", body = ErrorResponse),
        (status = 404, description = "Upstream page could not be fetched", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn get_passage(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    RawQuery(query): RawQuery,
) -> Result<Json<PassageResult>, ApiError> {
    let Path((book, chapter)) =
        path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let version = PassageQuery::from_raw(query.as_deref()).version_or(&state.default_version);
    let request = PassageRequest::new(book, parse_chapter(&chapter), version);

    match lookup(state.source.as_ref(), request, state.options).await {
        Ok(Some(passage)) => Ok(Json(passage)),
        Ok(None) => Err(ApiError::NotFound),
        Err(error) => Err(ApiError::Internal(error)),
    }
}
