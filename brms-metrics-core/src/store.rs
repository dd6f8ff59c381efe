// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Thread-safe store of test-run records using DashMap.
//!
//! Records are validated on save. Deleting a run removes its whole measured
//! hierarchy along with it.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{MetricsError, MetricsResult};
use crate::metrics::Metrics;
use crate::types::Identity;

/// Store of metrics records keyed by identity.
#[derive(Debug)]
pub struct MetricsStore {
    runs: DashMap<Identity, Metrics>,
}

impl MetricsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            runs: DashMap::new(),
        }
    }

    /// Create a store wrapped in an Arc for sharing across threads.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Validate and insert a new run. Fails if the identity is already stored.
    pub fn save(&self, metrics: Metrics) -> MetricsResult<Identity> {
        metrics.validate()?;

        let id = metrics.id();
        match self.runs.entry(id) {
            Entry::Occupied(_) => Err(MetricsError::RunAlreadyExists(id)),
            Entry::Vacant(slot) => {
                tracing::debug!(run = %id, packages = metrics.packages().len(), "Saved test run");
                slot.insert(metrics);
                Ok(id)
            }
        }
    }

    /// Apply `f` to a copy of a stored run, re-validate it and write it back.
    ///
    /// No store lock is held while `f` runs, so `f` may read the store.
    /// An invalid result leaves the stored run untouched. Concurrent updates
    /// of the same run are last-write-wins.
    pub fn update<F>(&self, id: &Identity, f: F) -> MetricsResult<()>
    where
        F: FnOnce(&mut Metrics),
    {
        let mut updated = self.get(id)?;
        f(&mut updated);
        updated.validate()?;

        let mut entry = self
            .runs
            .get_mut(id)
            .ok_or(MetricsError::RunNotFound(*id))?;
        *entry.value_mut() = updated;

        tracing::debug!(run = %id, "Updated test run");
        Ok(())
    }

    /// Get a copy of a stored run.
    pub fn get(&self, id: &Identity) -> MetricsResult<Metrics> {
        self.runs
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(MetricsError::RunNotFound(*id))
    }

    /// Remove a run together with all of its packages.
    pub fn delete(&self, id: &Identity) -> MetricsResult<Metrics> {
        let (_, metrics) = self
            .runs
            .remove(id)
            .ok_or(MetricsError::RunNotFound(*id))?;

        tracing::debug!(run = %id, packages = metrics.packages().len(), "Deleted test run");
        Ok(metrics)
    }

    /// Check if a run is stored.
    pub fn contains(&self, id: &Identity) -> bool {
        self.runs.contains_key(id)
    }

    /// Get all stored run identities.
    pub fn ids(&self) -> Vec<Identity> {
        self.runs.iter().map(|entry| *entry.key()).collect()
    }

    /// Get the number of stored runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}
