use crate::state::AppState;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use osprey_core::prelude::*;
use tracing::debug;

pub struct ApiError(ResolveError);

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ResolveError::AuthMissing => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.0.to_string()).into_response()
    }
}

/// GET /{owner}/{repo}/releases/download/{version}/{binary}
///
/// Answers with `302 Found` pointing at the asset's pre-signed storage URL.
/// The asset bytes are never proxied; the client follows the redirect on its
/// own, without credentials.
pub async fn download(
    State(state): State<AppState>,
    Path((owner, repo, version, binary)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let token = token_from_header(auth_header)?;

    let location = state
        .resolver
        .download_url(&owner, &repo, &version, &binary, &token)
        .await?;

    debug!(owner, repo, version, binary, "redirecting download");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// GET /status
pub async fn status() -> StatusCode {
    StatusCode::NO_CONTENT
}
