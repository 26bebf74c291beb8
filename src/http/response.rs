//! Response envelopes.
//!
//! # Responsibilities
//! - Wrap successful results as `{"respuesta": ...}`
//! - Map rule errors to `{"Error": message}` and a status code
//!
//! # Design Decisions
//! - Legacy policy answers every failure with 413, as existing clients expect
//! - Tagged policy picks the status from the error kind and adds `kind`
//! - The message text is identical under both policies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::ErrorStatusPolicy;
use crate::observability::metrics;
use crate::rules::{ErrorKind, RuleError};

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct Respuesta<T> {
    pub respuesta: T,
}

pub fn respuesta<T: Serialize>(value: T) -> Json<Respuesta<T>> {
    Json(Respuesta { respuesta: value })
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "Error")]
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

/// A rule error paired with the status policy in force.
#[derive(Debug)]
pub struct ApiError {
    pub error: RuleError,
    pub policy: ErrorStatusPolicy,
}

impl ApiError {
    pub fn new(error: RuleError, policy: ErrorStatusPolicy) -> Self {
        Self { error, policy }
    }

    pub fn status(&self) -> StatusCode {
        match self.policy {
            ErrorStatusPolicy::Legacy => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorStatusPolicy::Tagged => tagged_status(self.error.kind()),
        }
    }
}

fn tagged_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingField | ErrorKind::InvalidPayload => StatusCode::BAD_REQUEST,
        ErrorKind::UnknownCategory => StatusCode::NOT_FOUND,
        ErrorKind::DuplicateName | ErrorKind::HasDependents => StatusCode::CONFLICT,
        ErrorKind::StoreError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.error.kind();
        let message = self.error.to_string();

        match &self.error {
            RuleError::Store(e) => tracing::error!(kind = kind.as_str(), error = %e, "Store failure"),
            _ => tracing::warn!(kind = kind.as_str(), message = %message, "Request rejected"),
        }
        metrics::record_rule_failure(kind);

        let body = ErrorBody {
            error: &message,
            kind: (self.policy == ErrorStatusPolicy::Tagged).then_some(kind),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::error::MSG_DUPLICATE_CATEGORY;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_legacy_envelope() {
        let err = ApiError::new(
            RuleError::DuplicateName(MSG_DUPLICATE_CATEGORY),
            ErrorStatusPolicy::Legacy,
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "Error": "Esa cataegoria ya existe" })
        );
    }

    #[tokio::test]
    async fn test_tagged_envelope() {
        let response = ApiError::new(RuleError::HasDependents, ErrorStatusPolicy::Tagged)
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "Error": "Esta categoria tiene productos asociados, no se puede eliminar",
                "kind": "has_dependents",
            })
        );
    }

    #[test]
    fn test_every_failure_is_413_under_legacy() {
        let errors = [
            RuleError::MissingField("x"),
            RuleError::InvalidPayload("x".into()),
            RuleError::UnknownCategory,
            RuleError::HasDependents,
            RuleError::Store(sqlx::Error::PoolClosed),
        ];
        for error in errors {
            let api = ApiError::new(error, ErrorStatusPolicy::Legacy);
            assert_eq!(api.status(), StatusCode::PAYLOAD_TOO_LARGE);
        }
    }

    #[test]
    fn test_tagged_statuses() {
        assert_eq!(tagged_status(ErrorKind::MissingField), StatusCode::BAD_REQUEST);
        assert_eq!(tagged_status(ErrorKind::UnknownCategory), StatusCode::NOT_FOUND);
        assert_eq!(tagged_status(ErrorKind::DuplicateName), StatusCode::CONFLICT);
        assert_eq!(tagged_status(ErrorKind::StoreError), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_success_envelope() {
        let Json(body) = respuesta(3u64);
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "respuesta": 3 }));
    }
}
