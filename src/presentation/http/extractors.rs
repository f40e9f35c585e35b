// src/presentation/http/extractors.rs
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// Single integer id taken from the request path. A segment that does not
/// parse as an integer is rejected with a JSON 400 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(id))
    }
}
