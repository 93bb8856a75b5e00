use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::prelude::Error;

/// Json extractor that also runs the payload through its `Validate` rules,
/// so nothing schema-violating reaches the store.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::MalformedBody(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
