use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that is parsed whatever the `Content-Type` header says
///
/// Clients may post JSON without a content type. Every decode failure,
/// including an empty body, becomes [`ApiError::JsonError`] (422).
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::BodyRead)?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}
