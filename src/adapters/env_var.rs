// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable value source.
//!
//! This module provides a source that reads values from the process
//! environment. Every value it returns is a `RawValue::String`; the typed
//! registry never turns `"8080"` into an integer.

use crate::domain::RawValue;
use crate::ports::ValueSource;
use std::collections::HashMap;
use std::env;
use std::sync::{PoisonError, RwLock};

/// Maximum length for environment variable keys
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Value source for environment variables.
///
/// The environment is read on first access and cached. An optional prefix
/// restricts which variables are visible (and is stripped from their names);
/// names can be lowercased and have underscores replaced with dots.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::EnvVarSource;
///
/// // Every variable, `DATABASE_HOST` visible as `DATABASE.HOST`
/// let source = EnvVarSource::new();
///
/// // Only `MYAPP_*`, `MYAPP_DATABASE_HOST` visible as `database.host`
/// let source = EnvVarSource::with_prefix("MYAPP_").lowercase_keys(true);
/// ```
#[derive(Debug)]
pub struct EnvVarSource {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Lazily loaded variables
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl EnvVarSource {
    /// Creates a source over all environment variables.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            cache: RwLock::new(None),
        }
    }

    /// Creates a source over variables starting with `prefix`.
    ///
    /// The prefix is stripped from the key.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys (default: on).
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Creates a source over a fixed set of variables instead of the process
    /// environment.
    ///
    /// Keys are used as given. Intended for tests.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: false,
            cache: RwLock::new(Some(values)),
        }
    }

    /// Drops the cached environment so the next lookup reads it again.
    pub fn reload(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns all visible keys after transformation.
    pub fn keys(&self) -> Vec<String> {
        self.with_cache(|cache| cache.keys().cloned().collect())
    }

    fn transform_key(&self, key: String) -> Option<String> {
        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?.to_string(),
            None => key,
        };

        let key = if self.lowercase_keys {
            key.to_lowercase()
        } else {
            key
        };

        Some(if self.replace_underscores {
            key.replace('_', ".")
        } else {
            key
        })
    }

    fn load(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for (key, value) in env::vars_os() {
            let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) else {
                tracing::debug!("Skipping environment variable that is not valid UTF-8");
                continue;
            };

            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            if let Some(key) = self.transform_key(key) {
                vars.insert(key, value);
            }
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            vars.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        vars
    }

    fn with_cache<R>(&self, f: impl FnOnce(&HashMap<String, String>) -> R) -> R {
        {
            let guard = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cache) = guard.as_ref() {
                return f(cache);
            }
        }

        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let cache = guard.get_or_insert_with(|| self.load());
        f(cache)
    }
}

impl Default for EnvVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for EnvVarSource {
    fn get(&self, key: &str) -> Option<RawValue> {
        self.with_cache(|cache| cache.get(key).cloned().map(RawValue::String))
    }

    fn name(&self) -> &str {
        "env"
    }
}
