//! JSON body extractor with case-insensitive property names

use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Like [`axum::Json`], but object keys are lowercased before deserializing,
/// so `Name`, `name` and `NAME` all reach a field declared as `name`.
///
/// Target types are expected to use `#[serde(rename_all = "lowercase")]`.
pub struct CaseInsensitiveJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for CaseInsensitiveJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_value(fold_keys(value))
            .map(CaseInsensitiveJson)
            .map_err(|e| {
                ApiError::BadRequest(format!("Invalid request body: {}", e)).into_response()
            })
    }
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
