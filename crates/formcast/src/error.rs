// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for formcast.
//!
//! [`SerializeError`] covers every failure the crate can report:
//!
//! - **Registration errors**: a key that is not a media type, or a value
//!   that does not name a serializer
//! - **Input errors**: an action document that does not have the expected shape
//! - **Lookup errors**: no serializer registered for the requested media type
//! - **Configuration errors**: unreadable or unparsable configuration files
//!
//! All errors are reported synchronously by the call that failed.

use thiserror::Error;

/// The main error type for formcast operations.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// The registry key is not a syntactically valid media type.
    #[error("Invalid media type: '{0}'")]
    InvalidMediaType(String),

    /// The value registered for a media type is not a serializer.
    #[error("Serializer must be a function: '{0}' is not a known serializer")]
    InvalidSerializer(String),

    /// The action document does not have the expected structure.
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    /// No serializer is registered for the requested media type.
    #[error("No serializer registered for media type '{0}'")]
    UnsupportedMediaType(String),

    /// Configuration text could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SerializeError {
    fn from(err: toml::de::Error) -> Self {
        SerializeError::Config(err.to_string())
    }
}

/// Convenience type alias for Results with [`SerializeError`].
pub type Result<T> = std::result::Result<T, SerializeError>;
