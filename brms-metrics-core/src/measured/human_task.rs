// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Human tasks handled within one process instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Measurement;
use crate::timing::Timing;

/// A human task and how long it stayed open, keyed by task id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredHumanTask {
    task_id: i64,
    name: String,
    #[serde(flatten)]
    timing: Timing,
}

impl MeasuredHumanTask {
    pub fn new(task_id: i64, name: impl Into<String>) -> Self {
        Self {
            task_id,
            name: name.into(),
            timing: Timing::default(),
        }
    }

    pub fn task_id(&self) -> i64 {
        self.task_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_starting_time(&mut self, starting_time: Option<DateTime<Utc>>) {
        self.timing.starting_time = starting_time;
    }

    pub fn set_ending_time(&mut self, ending_time: Option<DateTime<Utc>>) {
        self.timing.ending_time = ending_time;
    }

    pub fn time_to_complete(&self) -> Option<i64> {
        self.timing.time_to_complete()
    }
}

impl Measurement for MeasuredHumanTask {
    type Key = i64;

    fn key(&self) -> i64 {
        self.task_id
    }

    fn print(&self) -> String {
        format!(
            "\n      Human task: {} ({}){}",
            self.name,
            self.task_id,
            self.timing.describe("\n       * ", "Task")
        )
    }
}

impl PartialEq for MeasuredHumanTask {
    fn eq(&self, other: &Self) -> bool {
        self.task_id == other.task_id
    }
}

impl Eq for MeasuredHumanTask {}
