//! Payload validation run before a handler is invoked.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Shape checks applied to an incoming payload.
pub trait ValidatePayload {
    /// Returns every violated constraint, or `Ok` to pass the payload
    /// through unchanged.
    fn validate(&self) -> Result<(), Vec<String>>;
}

/// JSON extractor that rejects invalid payloads before the handler runs.
///
/// A body that fails to deserialize and a body that deserializes but
/// violates the schema both short-circuit with [`ApiError::Validation`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidatePayload,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))?;

        payload.validate().map_err(ApiError::Validation)?;

        Ok(Self(payload))
    }
}
