//! Request body extractor that reports decode failures as `{"error": ...}` with 400.

use crate::error::AppError;
use crate::model::ListPayload;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};

/// Decoded `{"list": ...}` body.
#[derive(Debug)]
pub struct ListJson(pub ListPayload);

#[async_trait]
impl<S> FromRequest<S> for ListJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ListPayload>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ListJson(payload))
    }
}
