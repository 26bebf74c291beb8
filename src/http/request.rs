//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Decode JSON bodies leniently into rule inputs
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An empty body decodes as `T::default()` so absent fields surface as
//!   `MissingField` instead of a decoder error
//! - The `Content-Type` header is not checked

use axum::{
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::config::ErrorStatusPolicy;
use crate::http::response::ApiError;
use crate::rules::RuleError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID header, if any.
pub fn request_id_of<B>(request: &axum::http::Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Lenient JSON body extractor.
#[derive(Debug, Clone, Default)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
    ErrorStatusPolicy: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let policy = ErrorStatusPolicy::from_ref(state);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        decode(&bytes)
            .map(Payload)
            .map_err(|e| ApiError::new(e, policy).into_response())
    }
}

fn decode<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, RuleError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| RuleError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CategoryInput, ErrorKind, ProductInput};

    #[test]
    fn test_empty_body_is_default() {
        let input: CategoryInput = decode(b"").unwrap();
        assert!(input.nombre.is_none());
        let input: CategoryInput = decode(b"  \n").unwrap();
        assert!(input.nombre.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input: ProductInput =
            decode(br#"{"nombre":"cola","categoria_id":1,"precio":10}"#).unwrap();
        assert_eq!(input.nombre, Some(serde_json::json!("cola")));
        assert_eq!(input.categoria_id, Some(serde_json::json!(1)));
        assert!(input.descripcion.is_none());
    }

    #[test]
    fn test_any_field_value_decodes() {
        let input: CategoryInput = decode(br#"{"nombre": false}"#).unwrap();
        assert_eq!(input.nombre, Some(serde_json::json!(false)));
    }

    #[test]
    fn test_wrong_shape_is_invalid_payload() {
        let err = decode::<CategoryInput>(br#""cola""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPayload);
        let err = decode::<CategoryInput>(b"not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPayload);
    }

    #[test]
    fn test_uuid_request_id() {
        let request = axum::http::Request::new(());
        let id = UuidRequestId.make_request_id(&request).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
        assert_eq!(request_id_of(&request), "unknown");
    }
}
