use std::io;

use atelier_core::{CoreError, DeskError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP binding.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Desk(#[from] DeskError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Desk(DeskError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Core(_) | Self::Bind { .. } | Self::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(DeskError::not_found("bond", "bond-999"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "bond 'bond-999' not found");
    }

    #[test]
    fn serve_failures_map_to_500() {
        let err = AppError::Serve(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
