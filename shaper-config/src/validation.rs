use std::fmt;

use crate::loader::error::ConfigLoadError;
use crate::models::Config;

/// A non-fatal configuration finding, optionally with a suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} ({hint})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(&mut self, message: impl Into<String>, hint: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rejects settings the server cannot run with and reports ones it can run
/// with but probably should not.
pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigLoadError> {
    let paging = &config.paging;
    if paging.default_page_size == 0 || paging.max_page_size == 0 {
        return Err(ConfigLoadError::Invalid(
            "page sizes must be at least 1".into(),
        ));
    }
    if paging.default_page_size > paging.max_page_size {
        return Err(ConfigLoadError::Invalid(format!(
            "default page size {} exceeds maximum page size {}",
            paging.default_page_size, paging.max_page_size
        )));
    }

    let mut warnings = ConfigWarnings::default();
    if config.cors.is_wildcard_included() && !config.dev_mode {
        warnings.push_with_hint(
            "CORS allows any origin outside dev mode",
            "List explicit origins in CORS_ALLOWED_ORIGINS",
        );
    }
    Ok(warnings)
}
