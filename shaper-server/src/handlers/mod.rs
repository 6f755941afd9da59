pub mod author_collections;
pub mod authors;
pub mod courses;

use axum::{
    http::{HeaderValue, header},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};
use shaper_core::shaping::{Shaped, type_has_properties};
use tracing::info;

use crate::infra::errors::{AppError, AppResult};

/// `?fields=` on single-resource reads.
#[derive(Debug, Default, Deserialize)]
pub struct FieldsQuery {
    #[serde(default)]
    pub fields: Option<String>,
}

impl FieldsQuery {
    pub fn fields(&self) -> &str {
        self.fields.as_deref().unwrap_or_default()
    }
}

/// Rejects a field selection naming anything `T` does not expose.
pub(crate) fn ensure_fields<T: Shaped>(fields: &str) -> AppResult<()> {
    if type_has_properties::<T>(fields) {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "Field selection '{fields}' names a property {} does not have",
            T::SHAPE
        )))
    }
}

pub(crate) fn location(url: url::Url) -> AppResult<HeaderValue> {
    HeaderValue::from_str(url.as_str())
        .map_err(|_| AppError::internal("Resource location is not a valid header value"))
}

pub(crate) fn allow(methods: &'static str) -> [(header::HeaderName, HeaderValue); 1] {
    [(header::ALLOW, HeaderValue::from_static(methods))]
}

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Shaper server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
