// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Measurement records nested under a test run.
//!
//! The hierarchy is package → process → process instance → rule / human task.
//! Each level owns its children in a [`MeasuredSet`], which de-duplicates by
//! the child's own [`Measurement::key`].

use std::collections::hash_map::{Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod human_task;
pub mod instance;
pub mod package;
pub mod process;
pub mod rule;

pub use human_task::MeasuredHumanTask;
pub use instance::MeasuredProcessInstance;
pub use package::MeasuredPackage;
pub use process::MeasuredProcess;
pub use rule::MeasuredRule;

/// A record that can live in a [`MeasuredSet`] and contribute a report block.
pub trait Measurement {
    /// Value identifying the record among its siblings.
    type Key: Eq + Hash + Clone + Debug;

    fn key(&self) -> Self::Key;

    /// Human-readable block for this record alone (children excluded).
    fn print(&self) -> String;
}

/// Unordered set of owned child records, unique by key.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct MeasuredSet<T: Measurement> {
    items: HashMap<T::Key, T>,
}

impl<T: Measurement> MeasuredSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Insert a record. Returns false, keeping the existing record, if one
    /// with the same key is already present.
    pub fn insert(&mut self, item: T) -> bool {
        match self.items.entry(item.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(item);
                true
            }
        }
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.get(key)
    }

    pub fn get_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.items.get_mut(key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.contains_key(key)
    }

    /// Remove and return a record, dropping its own children with it.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        self.items.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Measurement> Default for MeasuredSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Measurement> FromIterator<T> for MeasuredSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<'a, T: Measurement> IntoIterator for &'a MeasuredSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_map::Values<'a, T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

// Serialized as a plain array; duplicates in the input collapse on load.
impl<T: Measurement + Serialize> Serialize for MeasuredSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.values())
    }
}

impl<'de, T: Measurement + Deserialize<'de>> Deserialize<'de> for MeasuredSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

/// Render an optional flag the way the reports expect (`true`/`false`/`null`).
pub(crate) fn flag(value: Option<bool>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first() {
        let mut set = MeasuredSet::new();
        let mut first = MeasuredRule::new("discount");
        first.record_firing(chrono::Utc::now());

        assert!(set.insert(first));
        assert!(!set.insert(MeasuredRule::new("discount")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&"discount".to_string()).unwrap().fire_count(), 1);
    }

    #[test]
    fn test_remove_drops_children() {
        let mut set = MeasuredSet::new();
        let mut package = MeasuredPackage::new("pkg");
        package.add_process(MeasuredProcess::new("proc"));
        set.insert(package);

        let removed = set.remove(&"pkg".to_string()).unwrap();
        assert_eq!(removed.processes().len(), 1);
        assert!(set.is_empty());
        assert!(!set.contains(&"pkg".to_string()));
        assert!(set.remove(&"pkg".to_string()).is_none());
    }

    #[test]
    fn test_json_array_roundtrip_collapses_duplicates() {
        let json = r#"[{"name":"a","fire_count":1},{"name":"a","fire_count":2},{"name":"b","fire_count":0}]"#;
        let set: MeasuredSet<MeasuredRule> = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(&"a".to_string()).unwrap().fire_count(), 1);

        let back = serde_json::to_value(&set).unwrap();
        assert_eq!(back.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_flag_rendering() {
        assert_eq!(flag(Some(true)), "true");
        assert_eq!(flag(Some(false)), "false");
        assert_eq!(flag(None), "null");
    }
}
