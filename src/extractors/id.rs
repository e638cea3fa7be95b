//! Extract the tutorial id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Path id parsed as `i64`. Anything else is `BadInput`; negative and zero ids parse.
#[derive(Clone, Copy, Debug)]
pub struct TutorialId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for TutorialId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadInput(e.body_text()))?;
        raw.parse::<i64>()
            .map(TutorialId)
            .map_err(|_| AppError::BadInput(format!("invalid id '{}'", raw)))
    }
}
