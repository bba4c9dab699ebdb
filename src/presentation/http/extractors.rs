// src/presentation/http/extractors.rs
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use super::error::HttpError;

/// `Json` body whose rejections answer with an [`ErrorResponse`](super::error::ErrorResponse).
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpError::from_json_rejection)?;
        Ok(Self(value))
    }
}
