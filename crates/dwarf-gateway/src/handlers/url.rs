use crate::error::{AppError, Result};
use crate::model::{CreateUrlsRequest, CreateUrlsResponse};
use crate::state::AppState;
use crate::validate::validate_url;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dwarf_core::{Code, StoreError};
use tracing::{error, warn};

fn moved_permanently(location: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Shortens every url of the request.
///
/// All urls are validated before anything is saved, so a single bad url
/// rejects the whole batch.
pub async fn create_urls_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlsRequest>,
) -> Result<Json<CreateUrlsResponse>> {
    if request.urls.is_empty() {
        return Err(AppError::EmptyRequest);
    }

    for url in &request.urls {
        if let Err(e) = validate_url(url) {
            warn!(url = %url, error = %e, "received bad payload");
            return Err(e.into());
        }
    }

    let mut urls = Vec::with_capacity(request.urls.len());
    for url in &request.urls {
        let code = state.store.save(url).await?;
        urls.push(code.to_url(&state.base_url));
    }

    Ok(Json(CreateUrlsResponse { urls }))
}

/// Redirects a short code to its url, or to the not-found url.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    if Code::new(code.as_str()).is_err() {
        warn!(code = %code, "malformed code");
        return moved_permanently(&state.not_found_url);
    }

    match state.store.load(&code).await {
        Ok(url) => moved_permanently(&url),
        Err(StoreError::NotFound(_)) => {
            warn!(code = %code, "could not find url for code");
            moved_permanently(&state.not_found_url)
        }
        Err(e) => {
            error!(code = %code, error = %e, "error while looking up url");
            moved_permanently(&state.not_found_url)
        }
    }
}

pub async fn root_handler(State(state): State<AppState>) -> Response {
    moved_permanently(&state.not_found_url)
}
