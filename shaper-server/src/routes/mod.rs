use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::handlers::{author_collections, authors, courses};

/// Create the API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/authors",
            get(authors::get_authors_handler)
                .post(authors::create_author_handler)
                .options(authors::authors_options_handler),
        )
        .route(
            "/api/authors/{author_id}",
            get(authors::get_author_handler).delete(authors::delete_author_handler),
        )
        .route(
            "/api/authors/{author_id}/courses",
            get(courses::get_courses_handler).post(courses::create_course_handler),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            get(courses::get_course_handler)
                .put(courses::update_course_handler)
                .delete(courses::delete_course_handler),
        )
        .route(
            "/api/authorcollections",
            post(author_collections::create_author_collection_handler)
                .options(author_collections::author_collections_options_handler),
        )
        .route(
            "/api/authorcollections/{ids}",
            get(author_collections::get_author_collection_handler),
        )
}
