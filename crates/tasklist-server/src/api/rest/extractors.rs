//! Custom extractors
//!
//! Body, path and query decoding failures surface as 400 with the same JSON
//! error body as every other [`ServerError`].

use super::types::ListParams;
use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};

/// JSON body extractor that rejects with [`ServerError::InvalidRequest`]
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::InvalidRequest(describe_rejection(rejection))),
        }
    }
}

fn describe_rejection(rejection: JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header".to_string()
        }
        other => format!("Failed to parse JSON: {}", other.body_text()),
    }
}

/// Path parameter extractor that rejects with [`ServerError::InvalidRequest`]
///
/// Covers segments that do not percent-decode to UTF-8.
pub struct PathExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for PathExtractor<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::InvalidRequest(rejection.body_text())),
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(ListParams::from_pairs(pairs)),
            Err(rejection) => Err(ServerError::InvalidRequest(rejection.body_text())),
        }
    }
}
