// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Serializer functions and the built-in form encoders.
//!
//! A [`Serializer`] turns an action into a request body. Two encoders ship
//! with the crate:
//!
//! - **plain text**: one `name=value` line per pair, CRLF-terminated, unescaped
//! - **URL-encoded**: a standard `application/x-www-form-urlencoded` body
//!
//! Both flatten the action's fields the same way: enabled fields with a value
//! become entries, and list values expand to one pair per element.

use crate::action::ActionLike;
use crate::body::{Body, Serialized, SerializerOutput, UrlEncodedParams};
use crate::entry_list::to_entry_list;
use crate::error::SerializeError;
use crate::name_value::to_name_value_pairs;
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

/// Media type conventionally used for [`BuiltinSerializer::PlainText`].
pub const TEXT_PLAIN: &str = "text/plain";

/// Media type conventionally used for [`BuiltinSerializer::UrlEncoded`].
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Encodes an action into a request body.
pub type Serializer = Arc<dyn Fn(&dyn ActionLike) -> SerializerOutput + Send + Sync>;

/// Wraps a synchronous function as a [`Serializer`].
///
/// ```rust
/// use formcast::{serializer_fn, Body, Serialized, Serializers};
///
/// let count_fields = serializer_fn(|action| {
///     Serialized::from(Body::from(action.fields().len().to_string()))
/// });
///
/// let mut serializers = Serializers::new();
/// serializers.set("text/x-field-count", count_fields).unwrap();
/// ```
pub fn serializer_fn<F>(f: F) -> Serializer
where
    F: Fn(&dyn ActionLike) -> Serialized + Send + Sync + 'static,
{
    Arc::new(move |action: &dyn ActionLike| SerializerOutput::Ready(f(action)))
}

/// Wraps a function returning a future as a [`Serializer`].
///
/// The future must own everything it needs; copy what is required out of the
/// action before returning it.
pub fn deferred_serializer_fn<F, Fut>(f: F) -> Serializer
where
    F: Fn(&dyn ActionLike) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Serialized> + Send + 'static,
{
    Arc::new(move |action: &dyn ActionLike| SerializerOutput::deferred(f(action)))
}

/// Encodes the action's fields as `name=value\r\n` lines.
///
/// Names and values are written verbatim: `=`, `&`, CR and LF are not escaped.
pub fn encode_plain_text<A: ActionLike + ?Sized>(action: &A) -> String {
    let pairs = to_name_value_pairs(&to_entry_list(action));
    tracing::trace!(pairs = pairs.len(), "Encoding plain text form data");

    pairs.iter().fold(String::new(), |mut body, (name, value)| {
        body.push_str(name);
        body.push('=');
        body.push_str(value);
        body.push_str("\r\n");
        body
    })
}

/// Encodes the action's fields as URL-encoded form parameters.
pub fn encode_url_encoded<A: ActionLike + ?Sized>(action: &A) -> UrlEncodedParams {
    let pairs = to_name_value_pairs(&to_entry_list(action));
    tracing::trace!(pairs = pairs.len(), "Encoding URL-encoded form data");

    UrlEncodedParams::from(pairs)
}

/// The plain-text form encoder as a [`Serializer`].
pub fn plain_text_form_data() -> Serializer {
    serializer_fn(|action| Serialized::Body(Body::Text(encode_plain_text(action))))
}

/// The URL-encoded form encoder as a [`Serializer`].
pub fn url_encoded_form_data() -> Serializer {
    serializer_fn(|action| Serialized::Body(Body::UrlEncoded(encode_url_encoded(action))))
}

/// Names of the built-in encoders, as used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinSerializer {
    /// `plain-text`: see [`encode_plain_text`].
    PlainText,
    /// `url-encoded`: see [`encode_url_encoded`].
    UrlEncoded,
}

impl BuiltinSerializer {
    /// All built-in encoders.
    pub const ALL: [BuiltinSerializer; 2] = [BuiltinSerializer::PlainText, BuiltinSerializer::UrlEncoded];

    /// Configuration name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinSerializer::PlainText => "plain-text",
            BuiltinSerializer::UrlEncoded => "url-encoded",
        }
    }

    /// Media type this encoder is conventionally registered under.
    pub fn media_type(self) -> &'static str {
        match self {
            BuiltinSerializer::PlainText => TEXT_PLAIN,
            BuiltinSerializer::UrlEncoded => FORM_URLENCODED,
        }
    }

    /// The encoder itself.
    pub fn serializer(self) -> Serializer {
        match self {
            BuiltinSerializer::PlainText => plain_text_form_data(),
            BuiltinSerializer::UrlEncoded => url_encoded_form_data(),
        }
    }
}

impl fmt::Display for BuiltinSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinSerializer {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinSerializer::ALL
            .into_iter()
            .find(|builtin| builtin.name() == s)
            .ok_or_else(|| SerializeError::InvalidSerializer(s.to_string()))
    }
}
