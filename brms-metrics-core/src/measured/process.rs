// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! A process definition exercised during a test run.

use serde::{Deserialize, Serialize};

use super::{MeasuredProcessInstance, MeasuredSet, Measurement};

/// All measured instances of one process definition, keyed by process id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredProcess {
    process_id: String,
    #[serde(default)]
    instances: MeasuredSet<MeasuredProcessInstance>,
}

impl MeasuredProcess {
    pub fn new(process_id: impl Into<String>) -> Self {
        Self {
            process_id: process_id.into(),
            instances: MeasuredSet::new(),
        }
    }

    pub fn process_id(&self) -> &str {
        &self.process_id
    }

    pub fn instances(&self) -> &MeasuredSet<MeasuredProcessInstance> {
        &self.instances
    }

    pub fn add_instance(&mut self, instance: MeasuredProcessInstance) -> bool {
        self.instances.insert(instance)
    }

    pub fn instance_mut(&mut self, process_instance_id: i64) -> Option<&mut MeasuredProcessInstance> {
        self.instances.get_mut(&process_instance_id)
    }

    /// Mean duration in milliseconds over the instances that have finished.
    pub fn average_time_to_complete(&self) -> Option<f64> {
        let durations: Vec<i64> = self
            .instances
            .iter()
            .filter_map(MeasuredProcessInstance::time_to_complete)
            .collect();
        if durations.is_empty() {
            return None;
        }
        Some(durations.iter().sum::<i64>() as f64 / durations.len() as f64)
    }
}

impl Measurement for MeasuredProcess {
    type Key = String;

    fn key(&self) -> String {
        self.process_id.clone()
    }

    fn print(&self) -> String {
        let average = self
            .average_time_to_complete()
            .map_or_else(|| "n/a".to_string(), |avg| format!("{:.1} ms", avg));
        format!(
            "\n\n  Process: {}\n   * Number of instances: {}\n   * Average time to complete: {}",
            self.process_id,
            self.instances.len(),
            average
        )
    }
}

impl PartialEq for MeasuredProcess {
    fn eq(&self, other: &Self) -> bool {
        self.process_id == other.process_id
    }
}

impl Eq for MeasuredProcess {}
