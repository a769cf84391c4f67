// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The serializer registry.
//!
//! [`Serializers`] maps media types to [`Serializer`]s. Keys are checked
//! against the media-type grammar on every insertion, whether through
//! [`Serializers::set`] or [`Serializers::merge`]. Iteration follows
//! insertion order; overwriting a key keeps its original position.
//!
//! # Example
//!
//! ```rust
//! use formcast::{Action, Field, Serializers};
//!
//! let mut serializers = Serializers::new();
//! serializers
//!     .set("text/plain", Serializers::plain_text_form_data())?
//!     .set("application/x-www-form-urlencoded", Serializers::url_encoded_form_data())?;
//!
//! let action = Action::new("search", "/search")
//!     .with_field(Field::new("q").with_value("hypermedia apis"));
//!
//! let output = serializers.serialize("application/x-www-form-urlencoded", &action)?;
//! let body = output.into_ready().unwrap();
//! assert_eq!(body.body().as_text().unwrap(), "q=hypermedia+apis");
//! # Ok::<(), formcast::SerializeError>(())
//! ```

use crate::action::ActionLike;
use crate::body::{Serialization, SerializerOutput};
use crate::config::SerializersConfig;
use crate::error::{Result, SerializeError};
use crate::media_type::is_media_type;
use crate::merge::{merge, MergeSource, MergeTarget};
use crate::serializer::{self, BuiltinSerializer, Serializer};
use std::fmt;
use std::future::Future;

/// Anything [`Serializers::merge`] accepts: pairs, a record, or a registry.
pub type SerializersInit = MergeSource<Serializer, Serializers>;

/// A registry of serializers keyed by media type.
#[derive(Clone, Default)]
pub struct Serializers {
    entries: Vec<(String, Serializer)>,
}

impl Serializers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from an initializer, processed as by [`merge`](Self::merge).
    ///
    /// # Errors
    ///
    /// Returns the first registration error encountered.
    pub fn with_init(init: impl Into<SerializersInit>) -> Result<Self> {
        let mut serializers = Self::new();
        serializers.merge(init)?;
        Ok(serializers)
    }

    /// Creates a registry holding both built-in encoders under their
    /// conventional media types.
    pub fn standard() -> Self {
        let entries = BuiltinSerializer::ALL
            .into_iter()
            .map(|builtin| (builtin.media_type().to_string(), builtin.serializer()))
            .collect();
        Self { entries }
    }

    /// Creates a registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::InvalidMediaType`] or
    /// [`SerializeError::InvalidSerializer`] for the first bad entry.
    pub fn from_config(config: &SerializersConfig) -> Result<Self> {
        let mut serializers = Self::new();
        for (media_type, name) in &config.serializers {
            serializers.set_builtin(media_type.as_str(), name)?;
        }
        Ok(serializers)
    }

    /// The plain-text form encoder (`name=value\r\n` lines).
    pub fn plain_text_form_data() -> Serializer {
        serializer::plain_text_form_data()
    }

    /// The `application/x-www-form-urlencoded` encoder.
    pub fn url_encoded_form_data() -> Serializer {
        serializer::url_encoded_form_data()
    }

    /// Registers `serializer` for `media_type`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::InvalidMediaType`] if `media_type` is not a
    /// valid media type. The registry is left unchanged in that case.
    pub fn set(&mut self, media_type: impl Into<String>, serializer: Serializer) -> Result<&mut Self> {
        let media_type = media_type.into();
        if !is_media_type(&media_type) {
            tracing::warn!("Rejected serializer registration for invalid media type '{}'", media_type);
            return Err(SerializeError::InvalidMediaType(media_type));
        }

        match self.entries.iter_mut().find(|(key, _)| *key == media_type) {
            Some(slot) => {
                tracing::debug!("Replaced serializer for {}", media_type);
                slot.1 = serializer;
            }
            None => {
                tracing::debug!("Registered serializer for {}", media_type);
                self.entries.push((media_type, serializer));
            }
        }
        Ok(self)
    }

    /// Registers a built-in encoder, named as in configuration files
    /// (`plain-text`, `url-encoded`), for `media_type`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::InvalidMediaType`] for a bad key, or
    /// [`SerializeError::InvalidSerializer`] if `name` is not a built-in encoder.
    pub fn set_builtin(&mut self, media_type: impl Into<String>, name: &str) -> Result<&mut Self> {
        let media_type = media_type.into();
        if !is_media_type(&media_type) {
            tracing::warn!("Rejected serializer registration for invalid media type '{}'", media_type);
            return Err(SerializeError::InvalidMediaType(media_type));
        }

        let builtin: BuiltinSerializer = name.parse().map_err(|err| {
            tracing::warn!("Rejected serializer registration for {}: unknown serializer '{}'", media_type, name);
            err
        })?;
        self.set(media_type, builtin.serializer())
    }

    /// Returns the serializer registered for `media_type`.
    pub fn get(&self, media_type: &str) -> Option<&Serializer> {
        self.entries
            .iter()
            .find(|(key, _)| key == media_type)
            .map(|(_, serializer)| serializer)
    }

    /// Returns true if a serializer is registered for `media_type`.
    pub fn has(&self, media_type: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == media_type)
    }

    /// Removes the serializer for `media_type`. Returns true if one was removed.
    pub fn delete(&mut self, media_type: &str) -> bool {
        match self.entries.iter().position(|(key, _)| key == media_type) {
            Some(index) => {
                self.entries.remove(index);
                tracing::debug!("Removed serializer for {}", media_type);
                true
            }
            None => false,
        }
    }

    /// Adds every entry of `init`, in order, through [`set`](Self::set).
    ///
    /// Not atomic: on error, entries before the failing one remain applied
    /// and entries after it are not applied.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected entry.
    pub fn merge(&mut self, init: impl Into<SerializersInit>) -> Result<()> {
        let source: SerializersInit = init.into();
        let applied = merge(self, source)?;
        tracing::debug!("Merged {} serializer(s); registry now holds {}", applied, self.len());
        Ok(())
    }

    /// Number of registered media types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered media types in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Registered entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Invokes the serializer registered for `media_type`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::UnsupportedMediaType`] if nothing is
    /// registered for `media_type`.
    pub fn serialize(&self, media_type: &str, action: &dyn ActionLike) -> Result<SerializerOutput> {
        let serializer = self
            .get(media_type)
            .ok_or_else(|| SerializeError::UnsupportedMediaType(media_type.to_string()))?;
        Ok(serializer(action))
    }

    /// Invokes the serializer for `media_type`, awaits its result if it is
    /// deferred, and pairs the body with its media type.
    ///
    /// The requested media type is used unless the serializer chose its own.
    /// The serializer runs before this returns; only a deferred result is
    /// left for the returned future.
    pub fn serialize_resolved(
        &self,
        media_type: &str,
        action: &dyn ActionLike,
    ) -> impl Future<Output = Result<Serialization>> + Send + 'static {
        let requested = media_type.to_string();
        let output = self.serialize(media_type, action);
        async move { Ok(output?.resolve().await.into_serialization(&requested)) }
    }
}

impl MergeTarget<Serializer> for Serializers {
    type Error = SerializeError;

    fn merge_entry(&mut self, key: String, value: Serializer) -> Result<()> {
        self.set(key, value).map(|_| ())
    }
}

impl fmt::Debug for Serializers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializers")
            .field("media_types", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Borrowing iterator over registry entries.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, Serializer)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Serializer);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, serializer)| (key.as_str(), serializer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Serializers {
    type Item = (&'a str, &'a Serializer);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Serializers {
    type Item = (String, Serializer);
    type IntoIter = std::vec::IntoIter<(String, Serializer)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Serializers> for SerializersInit {
    fn from(serializers: Serializers) -> Self {
        MergeSource::Registry(serializers)
    }
}

impl From<&Serializers> for SerializersInit {
    fn from(serializers: &Serializers) -> Self {
        MergeSource::Registry(serializers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Field};
    use crate::body::{Body, Serialized};
    use crate::serializer::serializer_fn;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn constant(text: &'static str) -> Serializer {
        serializer_fn(move |_| Serialized::from(Body::from(text)))
    }

    fn body_of(serializers: &Serializers, media_type: &str) -> String {
        let action = Action::new("a", "/").with_field(Field::new("a").with_value("1"));
        let output = serializers.serialize(media_type, &action).unwrap();
        output.into_ready().unwrap().body().as_text().unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut serializers = Serializers::new();
        serializers
            .set("text/plain", constant("plain"))
            .unwrap()
            .set("application/json", constant("json"))
            .unwrap();

        assert_eq!(serializers.len(), 2);
        assert!(serializers.has("text/plain"));
        assert!(serializers.get("application/json").is_some());
        assert!(serializers.get("application/xml").is_none());
        assert_eq!(body_of(&serializers, "application/json"), "json");
    }

    #[test]
    fn test_set_rejects_invalid_media_type() {
        let mut serializers = Serializers::new();
        serializers.set("text/plain", constant("plain")).unwrap();

        let err = serializers.set("not a media type", constant("bad")).unwrap_err();
        assert!(matches!(err, SerializeError::InvalidMediaType(ref m) if m == "not a media type"));
        assert_eq!(serializers.len(), 1);
        assert!(!serializers.has("not a media type"));
    }

    #[test]
    fn test_set_builtin_rejects_unknown_serializer() {
        let mut serializers = Serializers::new();
        let err = serializers.set_builtin("text/plain", "not a function").unwrap_err();
        assert!(matches!(err, SerializeError::InvalidSerializer(_)));
        assert!(serializers.is_empty());
    }

    #[test]
    fn test_set_builtin_checks_media_type_first() {
        let mut serializers = Serializers::new();
        let err = serializers.set_builtin("bogus", "not a function").unwrap_err();
        assert!(matches!(err, SerializeError::InvalidMediaType(_)));
    }

    #[test]
    fn test_set_builtin() {
        let mut serializers = Serializers::new();
        serializers.set_builtin("text/x-lines", "plain-text").unwrap();
        assert_eq!(body_of(&serializers, "text/x-lines"), "a=1\r\n");
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut serializers = Serializers::new();
        serializers.set("text/plain", constant("one")).unwrap();
        serializers.set("application/json", constant("two")).unwrap();
        serializers.set("text/plain", constant("three")).unwrap();

        assert_eq!(serializers.keys().collect::<Vec<_>>(), vec!["text/plain", "application/json"]);
        assert_eq!(body_of(&serializers, "text/plain"), "three");
    }

    #[test]
    fn test_delete() {
        let mut serializers = Serializers::standard();
        assert!(serializers.delete("text/plain"));
        assert!(!serializers.delete("text/plain"));
        assert!(!serializers.has("text/plain"));
        assert_eq!(serializers.len(), 1);
    }

    #[test]
    fn test_standard_registry() {
        let serializers = Serializers::standard();
        assert_eq!(
            serializers.keys().collect::<Vec<_>>(),
            vec!["text/plain", "application/x-www-form-urlencoded"]
        );
        assert_eq!(body_of(&serializers, "application/x-www-form-urlencoded"), "a=1");
    }

    #[test]
    fn test_with_init_from_pairs() {
        let serializers = Serializers::with_init([
            ("text/plain", constant("a")),
            ("application/json", constant("b")),
        ])
        .unwrap();
        assert_eq!(serializers.len(), 2);
    }

    #[test]
    fn test_with_init_from_record() {
        let mut record = BTreeMap::new();
        record.insert("text/plain".to_string(), constant("a"));
        let serializers = Serializers::with_init(record).unwrap();
        assert!(serializers.has("text/plain"));
    }

    #[test]
    fn test_merge_partial_application() {
        let mut serializers = Serializers::new();
        let err = serializers
            .merge(vec![
                ("text/plain", constant("a")),
                ("application/json", constant("b")),
                ("not a media type", constant("c")),
                ("application/xml", constant("d")),
            ])
            .unwrap_err();

        assert!(matches!(err, SerializeError::InvalidMediaType(_)));
        assert_eq!(serializers.keys().collect::<Vec<_>>(), vec!["text/plain", "application/json"]);
        assert!(!serializers.has("application/xml"));
    }

    #[test]
    fn test_merge_registries() {
        let mut first = Serializers::new();
        first.set("text/plain", constant("first-plain")).unwrap();
        first.set("application/json", constant("first-json")).unwrap();

        let mut second = Serializers::new();
        second.set("application/json", constant("second-json")).unwrap();
        second.set("application/xml", constant("second-xml")).unwrap();

        first.merge(&second).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(body_of(&first, "text/plain"), "first-plain");
        assert_eq!(body_of(&first, "application/json"), "second-json");
        assert_eq!(body_of(&first, "application/xml"), "second-xml");
        // The source registry is untouched.
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_serializer_entries_are_shared() {
        let shared = constant("shared");
        let mut serializers = Serializers::new();
        serializers.set("text/plain", shared.clone()).unwrap();
        assert!(Arc::ptr_eq(serializers.get("text/plain").unwrap(), &shared));
    }

    #[test]
    fn test_serialize_unsupported_media_type() {
        let serializers = Serializers::new();
        let err = serializers.serialize("text/plain", &Action::new("a", "/")).unwrap_err();
        assert!(matches!(err, SerializeError::UnsupportedMediaType(ref m) if m == "text/plain"));
    }

    #[test]
    fn test_iteration() {
        let serializers = Serializers::standard();
        let keys: Vec<&str> = serializers.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["text/plain", "application/x-www-form-urlencoded"]);
        assert_eq!((&serializers).into_iter().count(), 2);
        assert_eq!(serializers.clone().into_iter().count(), 2);
    }

    #[test]
    fn test_debug_lists_media_types() {
        let debug = format!("{:?}", Serializers::standard());
        assert!(debug.contains("text/plain"));
        assert!(debug.contains("application/x-www-form-urlencoded"));
    }

    #[tokio::test]
    async fn test_serialize_resolved_fills_requested_type() {
        let serializers = Serializers::standard();
        let action = Action::new("a", "/").with_field(Field::new("q").with_value("x y"));

        let serialization = serializers
            .serialize_resolved("application/x-www-form-urlencoded", &action)
            .await
            .unwrap();

        assert_eq!(serialization.media_type, "application/x-www-form-urlencoded");
        assert_eq!(serialization.body.as_text().unwrap(), "q=x+y");
    }
}
