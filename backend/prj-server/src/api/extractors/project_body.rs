//! Request body extractor for project writes

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// JSON body of a project write.
///
/// A request without a JSON content type, or with an empty body, yields
/// `T::default()` so the title check reports it. Malformed JSON is a bad
/// request.
pub struct ProjectBody<T>(pub T);

impl<T, S> FromRequest<S> for ProjectBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if !has_json_content_type(req.headers()) {
                return Ok(ProjectBody(T::default()));
            }

            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest {
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(ProjectBody(T::default()));
            }

            let body = serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest {
                message: format!("Failed to parse the request body as JSON: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            Ok(ProjectBody(body))
        }
    }
}

/// `application/json` or any `+json` media type
pub(crate) fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
