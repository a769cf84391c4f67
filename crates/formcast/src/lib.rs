// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # formcast
//!
//! Pluggable request body serializers for hypermedia form actions.
//!
//! An action names a method, a target, and a list of fields. formcast turns
//! those fields into a request body using a serializer picked by media type.
//!
//! ## Features
//!
//! - A [`Serializers`] registry keyed by validated media types
//! - Built-in `text/plain` and `application/x-www-form-urlencoded` encoders
//! - Grouped fields (checkboxes, multi-selects) expanded in declaration order
//! - Custom serializers, synchronous or deferred
//! - Registry configuration from `formcast.toml`
//!
//! ## Quick Start
//!
//! ```rust
//! use formcast::{Action, Field, Serializers};
//!
//! let serializers = Serializers::standard();
//!
//! let action = Action::new("add-item", "/orders/42/items")
//!     .with_method("POST")
//!     .with_field(Field::new("a").with_value("1"))
//!     .with_field(Field::new("b").with_value(vec!["x", "y"]));
//!
//! let output = serializers.serialize("text/plain", &action)?;
//! let body = output.into_ready().unwrap();
//! assert_eq!(body.body().as_text().unwrap(), "a=1\r\nb=x\r\nb=y\r\n");
//! # Ok::<(), formcast::SerializeError>(())
//! ```

/// Action and field model.
pub mod action;
/// Request body types.
pub mod body;
/// Registry configuration.
pub mod config;
/// Entry-list extraction.
pub mod entry_list;
/// Error types.
pub mod error;
/// Media-type syntax check.
pub mod media_type;
/// Merge policy for registries.
pub mod merge;
/// Name/value pair flattening.
pub mod name_value;
/// Serializer registry.
pub mod registry;
/// Serializer functions and built-in encoders.
pub mod serializer;

pub use action::{Action, ActionLike, Field, FieldValue, Scalar, DEFAULT_ACTION_TYPE};
pub use body::{Body, Serialization, Serialized, SerializerOutput, UrlEncodedParams};
pub use config::SerializersConfig;
pub use entry_list::{to_entry_list, Entry};
pub use error::{Result, SerializeError};
pub use media_type::is_media_type;
pub use merge::{MergeSource, MergeTarget};
pub use name_value::to_name_value_pairs;
pub use registry::{Serializers, SerializersInit};
pub use serializer::{
    deferred_serializer_fn, encode_plain_text, encode_url_encoded, serializer_fn, BuiltinSerializer, Serializer,
    FORM_URLENCODED, TEXT_PLAIN,
};
