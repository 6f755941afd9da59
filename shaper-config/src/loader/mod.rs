pub mod error;

use once_cell::sync::Lazy;
use std::{fs, net::IpAddr, path::PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::models::{
    Config, ConfigMetadata, CorsConfig, PagingConfig, ServerConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> =
    Lazy::new(|| vec![PathBuf::from("shaper.toml"), PathBuf::from("config/shaper.toml")]);

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Command-line host, preferred over every other source.
    pub host: Option<String>,
    /// Command-line port, preferred over every other source.
    pub port: Option<u16>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Overrides the bind address before the public URL is derived from it.
    pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        self.options.host = host;
        self.options.port = port;
        self
    }

    /// Loads `.env` into the process environment, then composes the
    /// configuration from the file and environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };
        debug!(env_file_loaded, "environment prepared");

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Composes the configuration from `env` without touching the process
    /// environment.
    pub fn load_with_env(
        &self,
        mut env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        if let Some(host) = &self.options.host {
            env.server_host = Some(host.clone());
        }
        if let Some(port) = self.options.port {
            env.server_port = Some(port);
        }
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) = compose_config(file_config, env, config_path, env_file_loaded)?;

        info!(
            bind = %config.server.bind_address(),
            config_path = ?config.metadata.config_path,
            "configuration loaded"
        );
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let source = match (&self.options.config_path, &env.config_path) {
            (Some(explicit), _) => Some((explicit.clone(), true)),
            (None, Some(from_env)) => Some((from_env.clone(), true)),
            (None, None) => DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .map(|path| (path.clone(), false)),
        };

        let Some((path, explicit)) = source else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No shaper.toml detected; falling back to environment variables",
            "Pass --config or set SHAPER_CONFIG_PATH to use a configuration file",
        );
    }

    let FileConfig {
        server: file_server,
        paging: file_paging,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let host = env
        .server_host
        .or(file_server.host)
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let port = env.server_port.or(file_server.port).unwrap_or(3000);
    let public_url = match env.server_public_url.or(file_server.public_url) {
        Some(raw) => Url::parse(raw.trim())
            .map_err(|source| ConfigLoadError::InvalidPublicUrl { value: raw, source })?,
        None => default_public_url(&host, port)?,
    };
    let server = ServerConfig {
        host,
        port,
        public_url,
    };

    let defaults = PagingConfig::default();
    let paging = PagingConfig {
        default_page_size: env
            .paging_default_page_size
            .or(file_paging.default_page_size)
            .unwrap_or(defaults.default_page_size),
        max_page_size: env
            .paging_max_page_size
            .or(file_paging.max_page_size)
            .unwrap_or(defaults.max_page_size),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_else(default_cors_origins),
        allowed_methods: env
            .cors_allowed_methods
            .or(file_cors.allowed_methods)
            .unwrap_or_else(default_cors_methods),
        allowed_headers: env
            .cors_allowed_headers
            .or(file_cors.allowed_headers)
            .unwrap_or_else(default_cors_headers),
    };

    let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

    let config = Config {
        server,
        paging,
        cors,
        dev_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    warnings.extend(validation::apply_guard_rails(&config)?);
    Ok((config, warnings))
}

/// Links point at `localhost` when the server binds every interface. IPv6
/// literals are bracketed.
fn default_public_url(host: &str, port: u16) -> Result<Url, ConfigLoadError> {
    let bare = host.trim().trim_start_matches('[').trim_end_matches(']');
    let link_host = match bare.parse::<IpAddr>() {
        Ok(ip) if ip.is_unspecified() => "localhost".to_string(),
        Ok(IpAddr::V6(ip)) => format!("[{ip}]"),
        _ => host.trim().to_string(),
    };
    let raw = format!("http://{link_host}:{port}");
    Url::parse(&raw).map_err(|source| ConfigLoadError::InvalidPublicUrl { value: raw, source })
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_cors_methods() -> Vec<String> {
    vec![
        "GET".to_string(),
        "HEAD".to_string(),
        "POST".to_string(),
        "PUT".to_string(),
        "DELETE".to_string(),
        "OPTIONS".to_string(),
    ]
}

fn default_cors_headers() -> Vec<String> {
    vec!["Accept".to_string(), "Content-Type".to_string()]
}
