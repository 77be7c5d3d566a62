//! HTTP error response mapping.
//!
//! Every failure becomes a `500`. Endpoints that answer in JSON report it as
//! `{"error":"Internal Server Error"}`, the others as plain text. The cause is
//! logged and never sent to the client.

use std::error::Error;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use covid19_domain::error::CovidError;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

type BoxError = Box<dyn Error + Send + Sync>;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// A failure reported as a JSON `500`.
#[derive(Debug)]
pub struct ApiError(BoxError);

impl From<CovidError> for ApiError {
    fn from(err: CovidError) -> Self {
        Self(Box::new(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: INTERNAL_SERVER_ERROR,
            }),
        )
            .into_response()
    }
}

/// A failure reported as a plain-text `500`.
#[derive(Debug)]
pub struct TextError(BoxError);

impl From<CovidError> for TextError {
    fn from(err: CovidError) -> Self {
        Self(Box::new(err))
    }
}

impl From<JsonRejection> for TextError {
    fn from(err: JsonRejection) -> Self {
        Self(Box::new(err))
    }
}

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR).into_response()
    }
}
