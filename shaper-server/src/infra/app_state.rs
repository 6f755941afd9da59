use std::{fmt, sync::Arc};

use shaper_config::Config;
use shaper_core::library::CourseLibrary;

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<CourseLibrary>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(library: CourseLibrary, config: Config) -> Self {
        Self {
            library: Arc::new(library),
            config: Arc::new(config),
        }
    }

    pub fn library(&self) -> &CourseLibrary {
        &self.library
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("public_url", &self.config.server.public_url.as_str())
            .finish_non_exhaustive()
    }
}
