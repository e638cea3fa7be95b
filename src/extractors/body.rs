//! Extract a create/update body and apply input defaults.

use crate::error::AppError;
use crate::model::{TutorialInput, TutorialPayload};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};

#[derive(Debug)]
pub struct TutorialBody(pub TutorialInput);

#[async_trait]
impl<S> FromRequest<S> for TutorialBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<TutorialPayload>::from_request(req, state).await?;
        Ok(TutorialBody(payload.into()))
    }
}
