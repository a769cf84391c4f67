// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Entry-list extraction.

use crate::action::{ActionLike, FieldValue};

/// One submittable field: its name and value, shape preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    value: FieldValue,
}

impl Entry {
    /// Creates an entry.
    pub fn new(name: impl Into<String>, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field value, scalar or list as declared.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// Collects the entries of every enabled field that has a value, in
/// declaration order. Same-named fields are kept as separate entries.
pub fn to_entry_list<A: ActionLike + ?Sized>(action: &A) -> Vec<Entry> {
    action
        .fields()
        .iter()
        .filter(|field| !field.disabled)
        .filter_map(|field| {
            field
                .value
                .as_ref()
                .map(|value| Entry::new(field.name.clone(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Field, Scalar};

    #[test]
    fn test_skips_disabled_and_valueless_fields() {
        let action = Action::new("a", "/").with_fields(vec![
            Field::new("first").with_value("1"),
            Field::new("hidden").with_value("2").with_disabled(true),
            Field::new("empty"),
            Field::new("last").with_value("3"),
        ]);

        let entries = to_entry_list(&action);
        let names: Vec<&str> = entries.iter().map(Entry::name).collect();
        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn test_preserves_value_shape() {
        let action = Action::new("a", "/").with_fields(vec![
            Field::new("one").with_value(5i64),
            Field::new("many").with_value(vec!["x", "y"]),
        ]);

        let entries = to_entry_list(&action);
        assert_eq!(entries[0].value(), &FieldValue::Scalar(Scalar::from(5i64)));
        assert_eq!(
            entries[1].value(),
            &FieldValue::List(vec![Scalar::from("x"), Scalar::from("y")])
        );
    }

    #[test]
    fn test_keeps_same_named_fields() {
        let fields = vec![
            Field::new("color").with_value("red"),
            Field::new("color").with_value("blue"),
        ];

        let entries = to_entry_list(&fields);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "color");
        assert_eq!(entries[1].name(), "color");
    }

    #[test]
    fn test_empty_list_value_is_still_an_entry() {
        let fields = vec![Field::new("tags").with_value(Vec::<Scalar>::new())];
        assert_eq!(to_entry_list(&fields).len(), 1);
    }

    #[test]
    fn test_counts_eligible_fields() {
        for n in 0..6 {
            let fields: Vec<Field> = (0..n)
                .flat_map(|i| {
                    vec![
                        Field::new(format!("f{i}")).with_value(i as i64),
                        Field::new(format!("d{i}")).with_value("x").with_disabled(true),
                    ]
                })
                .collect();
            assert_eq!(to_entry_list(&fields).len(), n);
        }
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let action = Action::new("a", "/")
            .with_field(Field::new("q").with_value("rust"))
            .with_field(Field::new("page").with_value(2i64));

        assert_eq!(to_entry_list(&action), to_entry_list(&action));
    }
}
