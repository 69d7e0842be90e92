//! Custom Axum extractors

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body whose rejections render the error envelope.
///
/// Type mismatches are 422. Syntax errors and a missing content type are 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::unprocessable(e.body_text())),
            Err(e) => Err(ApiError::bad_request(e.body_text())),
        }
    }
}

/// Integer id from the path. Non-numeric segments are not found.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> =
            Path::from_request_parts(parts, state)
                .await
                .map_err(|e: PathRejection| ApiError::not_found("path", e.body_text()))?;
        Ok(Self(id))
    }
}

/// Query string decoded with the first occurrence of each key winning.
///
/// Values reach `T` as strings, so its fields should be `String`-typed and
/// parse leniently. Rejections render the error envelope as 400.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> =
            Query::from_request_parts(parts, state)
                .await
                .map_err(|e: QueryRejection| ApiError::bad_request(e.body_text()))?;

        let mut first = serde_json::Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(serde_json::Value::String(value));
        }

        serde_json::from_value(serde_json::Value::Object(first))
            .map(Self)
            .map_err(ApiError::bad_request)
    }
}
