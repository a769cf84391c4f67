// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Registry configuration.
//!
//! Configuration is usually loaded from `formcast.toml` and maps media types
//! to built-in encoder names.
//!
//! # Example Configuration
//!
//! ```toml
//! [serializers]
//! "text/plain" = "plain-text"
//! "application/x-www-form-urlencoded" = "url-encoded"
//! "application/vnd.example.form" = "url-encoded"
//! ```
//!
//! Entries are validated when the registry is built
//! (see [`Serializers::from_config`](crate::Serializers::from_config)), not
//! when the file is parsed.

use crate::error::Result;
use crate::serializer::BuiltinSerializer;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "formcast.toml";

/// Serializer registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SerializersConfig {
    /// Media type → built-in encoder name (`plain-text`, `url-encoded`).
    #[serde(default = "default_serializers")]
    pub serializers: BTreeMap<String, String>,
}

fn default_serializers() -> BTreeMap<String, String> {
    BuiltinSerializer::ALL
        .into_iter()
        .map(|builtin| (builtin.media_type().to_string(), builtin.name().to_string()))
        .collect()
}

impl Default for SerializersConfig {
    fn default() -> Self {
        Self {
            serializers: default_serializers(),
        }
    }
}

impl SerializersConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Config`](crate::SerializeError::Config) if the
    /// text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No config at {:?}, using default serializers", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
