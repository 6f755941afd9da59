use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use shaper_core::{
    ShapedRecord,
    library::AuthorsResourceParameters,
    shaping::{shape_data, shape_one},
};
use shaper_model::{AuthorDto, AuthorForCreation, AuthorID};
use tracing::debug;

use super::{FieldsQuery, allow, ensure_fields, location};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
    extract::{Json, Path, Query},
    links::{authors_page_link, resource_url},
};

pub static X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// List authors
///
/// Query parameters: `mainCategory`, `searchQuery`, `orderBy` (public field
/// names, each optionally followed by `desc`), `pageNumber`, `pageSize` and
/// `fields`.
///
/// # Response
///
/// - `200 OK` with the page of shaped authors and an `X-Pagination` header
///   holding the page metadata and navigation links as JSON
/// - `400 Bad Request` for unknown sort or selected fields and for
///   non-positive page parameters
///
/// HEAD is served by the same handler without a body.
pub async fn get_authors_handler(
    State(state): State<AppState>,
    Query(params): Query<AuthorsResourceParameters>,
) -> AppResult<Response> {
    ensure_fields::<AuthorDto>(params.fields())?;

    let page = state.library().get_authors(&params).await?;

    let public_url = &state.config().server.public_url;
    let (current_page, page_size) = (page.current_page(), page.page_size());
    let metadata = page.metadata().with_links(|kind| {
        authors_page_link(public_url, &params, kind, current_page, page_size)
    });
    let header_value = serde_json::to_string(&metadata)
        .ok()
        .and_then(|json| HeaderValue::from_str(&json).ok())
        .ok_or_else(|| AppError::internal("Failed to encode pagination metadata"))?;

    let now = Utc::now();
    let authors: Vec<AuthorDto> = page
        .iter()
        .map(|author| AuthorDto::from_author_at(author, now))
        .collect();
    let shaped: Vec<ShapedRecord> =
        shape_data::<AuthorDto, _>(&authors, params.fields())?.collect();

    debug!(
        returned = shaped.len(),
        total = metadata.total_count,
        page = metadata.current_page,
        "listed authors"
    );
    Ok(([(X_PAGINATION.clone(), header_value)], Json(shaped)).into_response())
}

pub async fn authors_options_handler() -> impl IntoResponse {
    allow("GET,HEAD,POST,OPTIONS")
}

/// Get one author, optionally shaped with `?fields=`.
pub async fn get_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<AuthorID>,
    Query(query): Query<FieldsQuery>,
) -> AppResult<Json<ShapedRecord>> {
    ensure_fields::<AuthorDto>(query.fields())?;

    let author = state.library().get_author(author_id).await?;
    let shaped = shape_one(&AuthorDto::from(&author), query.fields())?;
    Ok(Json(shaped))
}

/// Create an author together with any courses in the payload.
///
/// Responds `201 Created` with the new author and a `Location` header.
pub async fn create_author_handler(
    State(state): State<AppState>,
    Json(payload): Json<AuthorForCreation>,
) -> AppResult<Response> {
    let author = state.library().add_author(payload).await;
    let url = resource_url(
        &state.config().server.public_url,
        &format!("/api/authors/{}", author.id),
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(url)?)],
        Json(AuthorDto::from(&author)),
    )
        .into_response())
}

pub async fn delete_author_handler(
    State(state): State<AppState>,
    Path(author_id): Path<AuthorID>,
) -> AppResult<StatusCode> {
    state.library().delete_author(author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
