use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use shaper_core::library::parse_id_list;
use shaper_model::{AuthorDto, AuthorForCreation};
use tracing::warn;

use super::{allow, location};
use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
    extract::{Json, Path},
    links::resource_url,
};

/// Authors named by a parenthesised id list, e.g.
/// `/api/authorcollections/(id1,id2)`.
///
/// # Response
///
/// - `200 OK` with the authors ordered by first then last name
/// - `400 Bad Request` when the list is empty or holds a malformed id
/// - `404 Not Found` when any id is unknown
pub async fn get_author_collection_handler(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> AppResult<Json<Vec<AuthorDto>>> {
    let ids = parse_id_list(&ids)?;
    if ids.is_empty() {
        warn!("author collection requested without ids");
        return Err(AppError::bad_request("At least one author id is required"));
    }

    let authors = state.library().get_authors_by_ids(&ids).await?;
    Ok(Json(authors.iter().map(AuthorDto::from).collect()))
}

/// Create several authors at once.
///
/// Responds `201 Created` with the new authors and a `Location` header
/// pointing at the collection of their ids.
pub async fn create_author_collection_handler(
    State(state): State<AppState>,
    Json(payload): Json<Vec<AuthorForCreation>>,
) -> AppResult<Response> {
    if payload.is_empty() {
        return Err(AppError::bad_request("At least one author is required"));
    }

    let authors = state.library().add_authors(payload).await;
    let ids = authors
        .iter()
        .map(|author| author.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let url = resource_url(
        &state.config().server.public_url,
        &format!("/api/authorcollections/({ids})"),
    );

    let body: Vec<AuthorDto> = authors.iter().map(AuthorDto::from).collect();
    Ok((StatusCode::CREATED, [(header::LOCATION, location(url)?)], Json(body)).into_response())
}

pub async fn author_collections_options_handler() -> impl IntoResponse {
    allow("GET,POST,OPTIONS")
}
