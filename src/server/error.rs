use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinError;

use crate::error::{ErrorKind, VocabError};

/// JSON body returned for every rejected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Failure of a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] VocabError),

    /// The blocking task running the store call panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(#[from] JoinError),
}

impl ErrorKind {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Persistence | ErrorKind::Corrupt => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(err) => err.kind().status(),
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Store(err) if err.is_client_error() => {
                tracing::info!(target: "vocab::server", error = %err, "request rejected");
            }
            _ => tracing::error!(target: "vocab::server", error = %self, "request failed"),
        }

        // Legacy clients match on this exact text.
        let message = match self {
            Self::Store(VocabError::NotFound { .. }) => "word not found".to_owned(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn panicked_store_task_is_500() {
        let join_err = tokio::task::spawn_blocking(|| -> usize { panic!("store call blew up") })
            .await
            .expect_err("task panicked");
        let response = ApiError::from(join_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(body.message.starts_with("store task failed"), "{}", body.message);
    }

    #[tokio::test]
    async fn store_errors_map_by_kind() {
        let cases = [
            (VocabError::NotFound { id: 4 }, StatusCode::NOT_FOUND),
            (VocabError::StaleRecord { id: 1 }, StatusCode::BAD_REQUEST),
            (
                VocabError::Corrupt {
                    reason: "bad".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
