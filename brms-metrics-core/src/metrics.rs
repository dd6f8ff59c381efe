// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The metrics record of a single test run.
//!
//! A `Metrics` value captures how the run was configured (machines, load
//! balancing, parallel start, knowledge-session mode), when it started and
//! ended, and owns the measured packages below it. Dropping the record drops
//! the whole hierarchy.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::measured::{flag, MeasuredPackage, MeasuredSet, Measurement};
use crate::timing::Timing;
use crate::types::Identity;

/// Metrics for a single test run.
///
/// Equality and hashing use only the record's [`Identity`]: two runs with
/// identical measurements are still different runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    id: Identity,
    /// Number of machines used to run the processes.
    number_of_machines: u32,
    /// If multiple machines were used, was load balancing applied?
    #[serde(default)]
    load_balancing_used: Option<bool>,
    /// Are the process instances started to run at the same time?
    #[serde(default)]
    processes_started_in_parallel: Option<bool>,
    /// Are the process instances each started in their own stateful knowledge session?
    #[serde(default)]
    processes_run_in_individual_knowledge_session: Option<bool>,
    #[serde(default)]
    packages: MeasuredSet<MeasuredPackage>,
    #[serde(flatten)]
    timing: Timing,
}

impl Metrics {
    /// Create a record for a new run. Packages start empty, timestamps unset.
    pub fn new(
        number_of_machines: u32,
        load_balancing_used: Option<bool>,
        processes_started_in_parallel: Option<bool>,
        processes_run_in_individual_knowledge_session: Option<bool>,
    ) -> Self {
        Self::with_identity(
            Identity::new(),
            number_of_machines,
            load_balancing_used,
            processes_started_in_parallel,
            processes_run_in_individual_knowledge_session,
        )
    }

    /// Same as [`Metrics::new`] but with a caller-provided identity.
    pub fn with_identity(
        id: Identity,
        number_of_machines: u32,
        load_balancing_used: Option<bool>,
        processes_started_in_parallel: Option<bool>,
        processes_run_in_individual_knowledge_session: Option<bool>,
    ) -> Self {
        Self {
            id,
            number_of_machines,
            load_balancing_used,
            processes_started_in_parallel,
            processes_run_in_individual_knowledge_session,
            packages: MeasuredSet::new(),
            timing: Timing::default(),
        }
    }

    pub fn id(&self) -> Identity {
        self.id
    }

    pub fn number_of_machines(&self) -> u32 {
        self.number_of_machines
    }

    pub fn load_balancing_used(&self) -> Option<bool> {
        self.load_balancing_used
    }

    pub fn processes_started_in_parallel(&self) -> Option<bool> {
        self.processes_started_in_parallel
    }

    pub fn processes_run_in_individual_knowledge_session(&self) -> Option<bool> {
        self.processes_run_in_individual_knowledge_session
    }

    pub fn packages(&self) -> &MeasuredSet<MeasuredPackage> {
        &self.packages
    }

    pub fn package_mut(&mut self, name: &str) -> Option<&mut MeasuredPackage> {
        self.packages.get_mut(&name.to_string())
    }

    /// Add a package. Returns false if an equal package is already present.
    pub fn add_package(&mut self, package: MeasuredPackage) -> bool {
        let name = package.name().to_string();
        let added = self.packages.insert(package);
        if !added {
            tracing::debug!(run = %self.id, package = %name, "Package already recorded");
        }
        added
    }

    pub fn starting_time(&self) -> Option<DateTime<Utc>> {
        self.timing.starting_time
    }

    pub fn set_starting_time(&mut self, starting_time: Option<DateTime<Utc>>) {
        self.timing.starting_time = starting_time;
    }

    pub fn ending_time(&self) -> Option<DateTime<Utc>> {
        self.timing.ending_time
    }

    pub fn set_ending_time(&mut self, ending_time: Option<DateTime<Utc>>) {
        self.timing.ending_time = ending_time;
    }

    /// Milliseconds between starting and ending time, if both are set.
    pub fn time_to_complete(&self) -> Option<i64> {
        self.timing.time_to_complete()
    }

    /// Summary of the run settings and its duration.
    pub fn print(&self) -> String {
        format!(
            "\nMetrics:\n * Number of machines: {}\n * Was load balancing used: {}\n * Were processes started in parallel: {}\n * Were processes run in an individual knowledge session: {}{}",
            self.number_of_machines,
            flag(self.load_balancing_used),
            flag(self.processes_started_in_parallel),
            flag(self.processes_run_in_individual_knowledge_session),
            self.timing.describe("\n\n * ", "Test")
        )
    }

    /// [`Metrics::print`] followed by every nested record, depth first.
    pub fn print_all(&self) -> String {
        let mut out = self.print();
        for package in &self.packages {
            out.push_str(&package.print());
            for process in package.processes() {
                out.push_str(&process.print());
                for instance in process.instances() {
                    out.push_str(&instance.print());
                    for rule in instance.rules() {
                        out.push_str(&rule.print());
                    }
                    for task in instance.human_tasks() {
                        out.push_str(&task.print());
                    }
                }
            }
        }
        out
    }

    /// Check the nested package and process keys before the record is stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for package in &self.packages {
            if package.name().trim().is_empty() {
                return Err(ValidationError::InvalidFieldValue {
                    field: "package.name",
                    value: package.name().to_string(),
                    reason: "Package name cannot be empty".to_string(),
                });
            }
            for process in package.processes() {
                if process.process_id().trim().is_empty() {
                    return Err(ValidationError::InvalidFieldValue {
                        field: "process.process_id",
                        value: process.process_id().to_string(),
                        reason: format!("Empty process id in package '{}'", package.name()),
                    });
                }
            }
        }

        Ok(())
    }
}

impl PartialEq for Metrics {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Metrics {}

impl Hash for Metrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn display_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "null".to_string(), |t| t.to_rfc3339())
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics [number_of_machines={}, load_balancing_used={}, processes_started_in_parallel={}, processes_run_in_individual_knowledge_session={}, starting_time={}, ending_time={}]",
            self.number_of_machines,
            flag(self.load_balancing_used),
            flag(self.processes_started_in_parallel),
            flag(self.processes_run_in_individual_knowledge_session),
            display_time(self.timing.starting_time),
            display_time(self.timing.ending_time)
        )
    }
}
