use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{parse_bool, parse_csv};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub paging: FilePagingConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePagingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub server_public_url: Option<String>,
    pub paging_default_page_size: Option<u32>,
    pub paging_max_page_size: Option<u32>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    /// Reads every supported variable from the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every supported variable through `lookup`, which returns the
    /// raw value of a variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |name: &str| lookup(name).and_then(|s| s.trim().parse().ok());
        let csv = |name: &str| lookup(name).map(|raw| parse_csv(&raw));

        Self {
            config_path: lookup("SHAPER_CONFIG_PATH")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            server_host: lookup("SERVER_HOST"),
            server_port: lookup("SERVER_PORT").and_then(|s| s.trim().parse().ok()),
            server_public_url: lookup("SERVER_PUBLIC_URL"),
            paging_default_page_size: number("PAGING_DEFAULT_PAGE_SIZE"),
            paging_max_page_size: number("PAGING_MAX_PAGE_SIZE"),
            cors_allowed_origins: csv("CORS_ALLOWED_ORIGINS"),
            cors_allowed_methods: csv("CORS_ALLOWED_METHODS"),
            cors_allowed_headers: csv("CORS_ALLOWED_HEADERS"),
            dev_mode: lookup("DEV_MODE").and_then(|raw| parse_bool(&raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn parses_typed_values() {
        let env = env(&[
            ("SERVER_PORT", "8080"),
            ("PAGING_MAX_PAGE_SIZE", " 50 "),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
            ("DEV_MODE", "true"),
        ]);
        assert_eq!(env.server_port, Some(8080));
        assert_eq!(env.paging_max_page_size, Some(50));
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(env.dev_mode, Some(true));
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let env = env(&[("SERVER_PORT", "eighty"), ("DEV_MODE", "sometimes")]);
        assert_eq!(env.server_port, None);
        assert_eq!(env.dev_mode, None);
    }

    #[test]
    fn file_sections_are_optional() {
        let file: FileConfig = toml::from_str("dev_mode = true\n").unwrap();
        assert_eq!(file.dev_mode, Some(true));
        assert!(file.server.host.is_none());
        assert!(file.paging.max_page_size.is_none());
    }
}
