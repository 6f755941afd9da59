use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use shaper_core::{ShapedRecord, shaping::shape_data};
use shaper_model::{AuthorID, CourseDto, CourseForCreation, CourseForUpdate, CourseID};

use super::{FieldsQuery, ensure_fields, location};
use crate::infra::{
    app_state::AppState,
    errors::AppResult,
    extract::{Json, Path, Query},
    links::resource_url,
};

/// Courses of one author ordered by title, optionally shaped with
/// `?fields=`.
pub async fn get_courses_handler(
    State(state): State<AppState>,
    Path(author_id): Path<AuthorID>,
    Query(query): Query<FieldsQuery>,
) -> AppResult<Json<Vec<ShapedRecord>>> {
    ensure_fields::<CourseDto>(query.fields())?;

    let courses: Vec<CourseDto> = state
        .library()
        .get_courses(author_id)
        .await?
        .iter()
        .map(CourseDto::from)
        .collect();
    let shaped = shape_data::<CourseDto, _>(&courses, query.fields())?.collect();
    Ok(Json(shaped))
}

pub async fn get_course_handler(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(AuthorID, CourseID)>,
) -> AppResult<Json<CourseDto>> {
    let course = state.library().get_course(author_id, course_id).await?;
    Ok(Json(CourseDto::from(&course)))
}

pub async fn create_course_handler(
    State(state): State<AppState>,
    Path(author_id): Path<AuthorID>,
    Json(payload): Json<CourseForCreation>,
) -> AppResult<Response> {
    let course = state.library().add_course(author_id, payload).await?;
    let url = resource_url(
        &state.config().server.public_url,
        &format!("/api/authors/{author_id}/courses/{}", course.id),
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(url)?)],
        Json(CourseDto::from(&course)),
    )
        .into_response())
}

/// Replace the title and description of a course.
pub async fn update_course_handler(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(AuthorID, CourseID)>,
    Json(payload): Json<CourseForUpdate>,
) -> AppResult<StatusCode> {
    state
        .library()
        .update_course(author_id, course_id, payload)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_course_handler(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(AuthorID, CourseID)>,
) -> AppResult<StatusCode> {
    state.library().delete_course(author_id, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
