//! JSON extractor with `validator` rules applied.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed its `Validate` rules.
///
/// Malformed or mistyped bodies are rejected with `400 JSON_EXTRACTION`
/// (`415` without a JSON content type); rule violations with
/// `400 VALIDATION_ERROR` and the failing fields under `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 3, max = 50))]
///     title: String,
/// }
///
/// async fn create(ValidatedJson(body): ValidatedJson<CreateProduct>) -> String {
///     body.title
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
