// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Request body types produced by serializers.

use futures_util::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// Ordered `application/x-www-form-urlencoded` parameters.
///
/// Duplicate names are allowed and order is preserved. The [`Display`]
/// implementation yields the encoded body string.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlEncodedParams {
    pairs: Vec<(String, String)>,
}

impl UrlEncodedParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an encoded body string.
    pub fn parse(input: &str) -> Self {
        form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Appends a parameter.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `name`, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// The decoded pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Vec<(String, String)>> for UrlEncodedParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlEncodedParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl fmt::Display for UrlEncodedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        f.write_str(&encoded)
    }
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Text body.
    Text(String),
    /// URL-encoded form parameters.
    UrlEncoded(UrlEncodedParams),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Body {
    /// Returns the body as text, if it is textual.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Body::Text(text) => Some(text.clone()),
            Body::UrlEncoded(params) => Some(params.to_string()),
            Body::Bytes(bytes) => std::str::from_utf8(bytes).ok().map(str::to_string),
        }
    }

    /// Converts the body to the bytes to put on the wire.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Text(text) => text.into_bytes(),
            Body::UrlEncoded(params) => params.to_string().into_bytes(),
            Body::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<UrlEncodedParams> for Body {
    fn from(params: UrlEncodedParams) -> Self {
        Body::UrlEncoded(params)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(bytes)
    }
}

/// A body together with the media type it should be sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serialization {
    /// Content-Type of the body.
    pub media_type: String,
    /// The body itself.
    pub body: Body,
}

impl Serialization {
    /// Creates a serialization record.
    pub fn new(media_type: impl Into<String>, body: impl Into<Body>) -> Self {
        Self {
            media_type: media_type.into(),
            body: body.into(),
        }
    }
}

/// What a serializer produces: a bare body, sent under the requested media
/// type, or a [`Serialization`] that overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Serialized {
    /// Body only.
    Body(Body),
    /// Body with an explicit media type.
    Serialization(Serialization),
}

impl Serialized {
    /// The body, regardless of variant.
    pub fn body(&self) -> &Body {
        match self {
            Serialized::Body(body) => body,
            Serialized::Serialization(serialization) => &serialization.body,
        }
    }

    /// Normalizes into a [`Serialization`], using `requested` when the
    /// serializer did not pick a media type itself.
    pub fn into_serialization(self, requested: &str) -> Serialization {
        match self {
            Serialized::Body(body) => Serialization::new(requested, body),
            Serialized::Serialization(serialization) => serialization,
        }
    }
}

impl From<Body> for Serialized {
    fn from(body: Body) -> Self {
        Serialized::Body(body)
    }
}

impl From<Serialization> for Serialized {
    fn from(serialization: Serialization) -> Self {
        Serialized::Serialization(serialization)
    }
}

/// The result of invoking a serializer: available now, or pending.
pub enum SerializerOutput {
    /// Immediately available.
    Ready(Serialized),
    /// Produced by a future the caller must await.
    Deferred(BoxFuture<'static, Serialized>),
}

impl SerializerOutput {
    /// Wraps an immediate result.
    pub fn ready(serialized: impl Into<Serialized>) -> Self {
        SerializerOutput::Ready(serialized.into())
    }

    /// Wraps a pending result.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Serialized> + Send + 'static,
    {
        SerializerOutput::Deferred(Box::pin(future))
    }

    /// Returns true if the result has to be awaited.
    pub fn is_deferred(&self) -> bool {
        matches!(self, SerializerOutput::Deferred(_))
    }

    /// Returns the result if it is available without awaiting.
    pub fn into_ready(self) -> Option<Serialized> {
        match self {
            SerializerOutput::Ready(serialized) => Some(serialized),
            SerializerOutput::Deferred(_) => None,
        }
    }

    /// Awaits the result. Ready results resolve immediately.
    pub async fn resolve(self) -> Serialized {
        match self {
            SerializerOutput::Ready(serialized) => serialized,
            SerializerOutput::Deferred(future) => future.await,
        }
    }
}

impl fmt::Debug for SerializerOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializerOutput::Ready(serialized) => f.debug_tuple("Ready").field(serialized).finish(),
            SerializerOutput::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
