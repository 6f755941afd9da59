//! HTTP front end for the Shaper course library.
//!
//! Listing endpoints accept `orderBy`, `fields`, `pageNumber` and `pageSize`
//! and answer with shaped records plus an `X-Pagination` header; see
//! [`handlers::authors::get_authors_handler`].

pub mod handlers;
pub mod infra;
pub mod routes;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower::ServiceExt;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub use infra::app_state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state);

    let app: Router = Router::new()
        .route("/ping", get(handlers::ping_handler))
        .merge(routes::create_api_router())
        .with_state(state);

    // The CORS layer answers every OPTIONS request itself; plain OPTIONS
    // requests (no preflight header) go straight to the resource handlers so
    // they can report `Allow`.
    let direct = app.clone();
    app.layer(cors_layer)
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let direct = direct.clone();
            async move { route_plain_options(direct, req, next).await }
        }))
        .layer(TraceLayer::new_for_http())
}

async fn route_plain_options(direct: Router, req: Request, next: Next) -> Response {
    let is_preflight = req
        .headers()
        .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);
    if req.method() == Method::OPTIONS && !is_preflight {
        match direct.oneshot(req).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    } else {
        next.run(req).await
    }
}

/// Permissive in dev mode, allow-list otherwise.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    if state.config().dev_mode {
        return CorsLayer::permissive();
    }

    let cors = &state.config().cors;
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter(|origin| origin.trim() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();
    let allow_origin = if origins.is_empty() || cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|method| match Method::from_bytes(method.trim().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                warn!(method = %method, "ignoring invalid CORS method");
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|name| match HeaderName::from_bytes(name.trim().as_bytes()) {
            Ok(name) => Some(name),
            Err(_) => {
                warn!(header = %name, "ignoring invalid CORS header");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
        .expose_headers([
            HeaderName::from_static("x-pagination"),
            header::LOCATION,
        ])
}
