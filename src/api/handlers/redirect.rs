//! Handler for short URL redirect.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::domain::entities::LongUrl;
use crate::domain::repositories::LookupError;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Response
///
/// `302 Found` with the long URL in the `Location` header. Bytes that may not
/// appear in a header (controls, spaces, non-ASCII) are percent-encoded.
///
/// When static files are configured and `short_url` is not a known code, the
/// file of that name is served instead, if it exists.
///
/// # Errors
///
/// Returns 404 Not Found with `{ "Error": "URL not found" }` if the code has
/// no mapping and no static file matches.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&short_url) {
        Ok(long_url) => found(&short_url, &long_url),
        Err(miss) => match state.static_files {
            Some(files) => serve_static(files, request, miss).await,
            None => Err(AppError::not_found(miss.to_string())),
        },
    }
}

fn found(code: &str, long_url: &LongUrl) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(encode_location(long_url.as_str())).map_err(|_| {
        warn!(code, "Encoded URL is not a valid Location header");
        AppError::internal("Stored URL cannot be used as a redirect target")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

async fn serve_static(
    files: ServeDir,
    request: Request,
    miss: LookupError,
) -> Result<Response, AppError> {
    let Ok(response) = files.oneshot(request).await;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(AppError::not_found(miss.to_string()));
    }

    debug!(status = %response.status(), "Served static file in place of a code");
    Ok(response.map(Body::new))
}
