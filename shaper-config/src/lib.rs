//! Configuration library for the Shaper server.
//!
//! Settings are composed from an optional TOML file, the process
//! environment (optionally seeded from a `.env` file) and built-in defaults,
//! then checked by a small set of guard rails before the server starts.

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{Config, ConfigMetadata, CorsConfig, PagingConfig, ServerConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
