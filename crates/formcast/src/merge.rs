// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Merge policy shared by registries.
//!
//! A [`MergeSource`] is one of three shapes: an ordered list of pairs, a plain
//! key/value record, or another registry. [`merge`] resolves the shape once
//! and feeds every entry through [`MergeTarget::merge_entry`], so validation
//! and overwrite behavior are the target's own regardless of where the
//! entries came from.

use std::collections::{BTreeMap, HashMap};

/// A keyed collection that accepts entries one at a time.
pub trait MergeTarget<V> {
    /// Error returned when an entry is rejected.
    type Error;

    /// Inserts or overwrites the entry for `key`.
    fn merge_entry(&mut self, key: String, value: V) -> Result<(), Self::Error>;
}

/// The accepted shapes of merge input.
#[derive(Debug, Clone)]
pub enum MergeSource<V, R> {
    /// Ordered pairs. Later pairs win over earlier ones with the same key.
    Pairs(Vec<(String, V)>),
    /// A plain record, applied in key order.
    Record(BTreeMap<String, V>),
    /// Another registry, applied in its iteration order.
    Registry(R),
}

/// Applies every entry of `source` to `target`, in order.
///
/// Stops at the first rejected entry and returns its error. Entries applied
/// before the failure stay applied; entries after it are not attempted.
/// Returns the number of entries applied.
pub fn merge<T, V, R>(target: &mut T, source: MergeSource<V, R>) -> Result<usize, T::Error>
where
    T: MergeTarget<V> + ?Sized,
    R: IntoIterator<Item = (String, V)>,
{
    match source {
        MergeSource::Pairs(pairs) => apply(target, pairs),
        MergeSource::Record(record) => apply(target, record),
        MergeSource::Registry(registry) => apply(target, registry),
    }
}

fn apply<T, V, I>(target: &mut T, entries: I) -> Result<usize, T::Error>
where
    T: MergeTarget<V> + ?Sized,
    I: IntoIterator<Item = (String, V)>,
{
    let mut applied = 0;
    for (key, value) in entries {
        target.merge_entry(key, value)?;
        applied += 1;
    }
    Ok(applied)
}

impl<V, R> From<Vec<(String, V)>> for MergeSource<V, R> {
    fn from(pairs: Vec<(String, V)>) -> Self {
        MergeSource::Pairs(pairs)
    }
}

impl<V, R> From<Vec<(&str, V)>> for MergeSource<V, R> {
    fn from(pairs: Vec<(&str, V)>) -> Self {
        MergeSource::Pairs(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl<V, R, const N: usize> From<[(&str, V); N]> for MergeSource<V, R> {
    fn from(pairs: [(&str, V); N]) -> Self {
        MergeSource::Pairs(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl<V, R> From<BTreeMap<String, V>> for MergeSource<V, R> {
    fn from(record: BTreeMap<String, V>) -> Self {
        MergeSource::Record(record)
    }
}

impl<V, R> From<HashMap<String, V>> for MergeSource<V, R> {
    fn from(record: HashMap<String, V>) -> Self {
        MergeSource::Record(record.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts any key except ones starting with `!`.
    #[derive(Default)]
    struct Target {
        entries: Vec<(String, u32)>,
    }

    impl MergeTarget<u32> for Target {
        type Error = String;

        fn merge_entry(&mut self, key: String, value: u32) -> Result<(), String> {
            if key.starts_with('!') {
                return Err(key);
            }
            match self.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => self.entries.push((key, value)),
            }
            Ok(())
        }
    }

    type Source = MergeSource<u32, Vec<(String, u32)>>;

    #[test]
    fn test_pairs_later_wins() {
        let mut target = Target::default();
        let source: Source = vec![("a", 1), ("b", 2), ("a", 3)].into();
        assert_eq!(merge(&mut target, source), Ok(3));
        assert_eq!(target.entries, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_record_applies_in_key_order() {
        let mut target = Target::default();
        let record: BTreeMap<String, u32> = [("b".to_string(), 2), ("a".to_string(), 1)].into();
        assert_eq!(merge(&mut target, Source::from(record)), Ok(2));
        assert_eq!(target.entries[0].0, "a");
        assert_eq!(target.entries[1].0, "b");
    }

    #[test]
    fn test_registry_shape() {
        let mut target = Target::default();
        let other = vec![("x".to_string(), 9), ("y".to_string(), 8)];
        assert_eq!(merge(&mut target, Source::Registry(other)), Ok(2));
        assert_eq!(target.entries.len(), 2);
    }

    #[test]
    fn test_stops_at_first_error() {
        let mut target = Target::default();
        let source: Source = [("a", 1), ("!bad", 2), ("c", 3)].into();
        assert_eq!(merge(&mut target, source), Err("!bad".to_string()));
        assert_eq!(target.entries, vec![("a".to_string(), 1)]);
    }

    #[test]
    fn test_hash_map_source() {
        let mut target = Target::default();
        let map: HashMap<String, u32> = [("k".to_string(), 1)].into();
        assert_eq!(merge(&mut target, Source::from(map)), Ok(1));
    }
}
