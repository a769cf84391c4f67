// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Minimal hypermedia action model.
//!
//! Serializers only ever see an action through [`ActionLike`], which exposes
//! the ordered field collection. [`Action`] and [`Field`] are a small concrete
//! model that can be built in code or deserialized from a JSON action document.

use crate::error::{Result, SerializeError};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Media type assumed for actions that do not declare a `type`.
pub const DEFAULT_ACTION_TYPE: &str = "application/x-www-form-urlencoded";

/// Anything that exposes an ordered collection of fields.
pub trait ActionLike {
    /// The action's fields in declaration order.
    fn fields(&self) -> &[Field];
}

/// A single field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value, rendered as `true` or `false`.
    Bool(bool),
    /// Numeric value, rendered in its JSON form.
    Number(serde_json::Number),
    /// Text value, rendered verbatim.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// The value carried by a field: one scalar, or a group of scalars
/// (checkbox groups, multi-selects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A group of values sharing the field name.
    List(Vec<Scalar>),
    /// A single value.
    Scalar(Scalar),
}

macro_rules! impl_field_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Scalar(value.into())
                }
            }

            impl From<Vec<$ty>> for FieldValue {
                fn from(values: Vec<$ty>) -> Self {
                    FieldValue::List(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

impl_field_value_from!(&str, String, bool, i64, u64);

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<Scalar>> for FieldValue {
    fn from(values: Vec<Scalar>) -> Self {
        FieldValue::List(values)
    }
}

/// A field of an action.
///
/// # Example
///
/// ```rust
/// use formcast::Field;
///
/// let field = Field::new("tags").with_value(vec!["red", "blue"]);
/// assert!(!field.disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name. Several fields may share a name.
    pub name: String,

    /// Field value. `None` (or JSON `null`) means the field has no value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,

    /// Disabled fields are never submitted.
    #[serde(default)]
    pub disabled: bool,
}

impl Field {
    /// Creates an enabled field without a value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            disabled: false,
        }
    }

    /// Sets the field value.
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A hypermedia action: a method and target plus the fields to submit.
///
/// # Example
///
/// ```rust
/// use formcast::{Action, Field};
///
/// let action = Action::new("add-item", "/orders/42/items")
///     .with_method("post")
///     .with_field(Field::new("productCode").with_value("XYZ"))
///     .with_field(Field::new("quantity").with_value(2i64));
///
/// assert_eq!(action.method, "POST");
/// assert_eq!(action.media_type(), "application/x-www-form-urlencoded");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action name, unique within its entity.
    pub name: String,

    /// Target URL.
    pub href: String,

    /// HTTP method (GET, POST, PUT, ...).
    #[serde(default = "default_method")]
    pub method: String,

    /// Declared media type of the request body.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Action {
    /// Creates a GET action with no fields.
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            method: default_method(),
            media_type: None,
            title: None,
            fields: Vec::new(),
        }
    }

    /// Sets the HTTP method (normalized to upper case).
    pub fn with_method(mut self, method: &str) -> Self {
        self.method = method.to_uppercase();
        self
    }

    /// Sets the declared body media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Appends a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replaces all fields.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Returns the declared media type, or [`DEFAULT_ACTION_TYPE`].
    pub fn media_type(&self) -> &str {
        self.media_type.as_deref().unwrap_or(DEFAULT_ACTION_TYPE)
    }

    /// Builds an action from a JSON action document.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::MalformedAction`] if `fields` is present but
    /// not an array, if a field has an empty name, or if the document does
    /// not otherwise match the action shape.
    pub fn from_json(value: JsonValue) -> Result<Self> {
        match value.get("fields") {
            None | Some(JsonValue::Array(_)) => {}
            Some(other) => {
                return Err(SerializeError::MalformedAction(format!(
                    "fields must be an array, found {}",
                    json_kind(other)
                )));
            }
        }

        let action: Action = serde_json::from_value(value)
            .map_err(|e| SerializeError::MalformedAction(e.to_string()))?;

        if let Some(index) = action.fields.iter().position(|f| f.name.is_empty()) {
            return Err(SerializeError::MalformedAction(format!(
                "field at index {} has an empty name",
                index
            )));
        }

        Ok(action)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

impl ActionLike for Action {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl ActionLike for [Field] {
    fn fields(&self) -> &[Field] {
        self
    }
}

impl ActionLike for Vec<Field> {
    fn fields(&self) -> &[Field] {
        self
    }
}
