//! JSON submission extractor.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationDetail};

/// Field name reported when the body itself cannot be read.
pub const BODY_FIELD: &str = "body";

/// JSON request body whose rejection is reported like a validation failure.
///
/// A body that is not JSON, or that `T` cannot be read from at all, becomes a
/// single `{ "field": "body", "message": ... }` issue with status 400.
/// Submission types read mistyped fields leniently, so for them this only
/// happens for bodies that are not a JSON object.
#[derive(Debug, Clone)]
pub struct Submission<T>(pub T);

#[async_trait::async_trait]
impl<T, S> FromRequest<S> for Submission<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Submission(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(ApiError::Validation(vec![ValidationDetail::new(
                    BODY_FIELD,
                    rejection.body_text(),
                )]))
            }
        }
    }
}
