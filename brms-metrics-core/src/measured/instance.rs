// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! A single process instance run during a test.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MeasuredHumanTask, MeasuredRule, MeasuredSet, Measurement};
use crate::timing::Timing;

/// Timing of one process instance plus the rules and human tasks it touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredProcessInstance {
    process_instance_id: i64,
    #[serde(flatten)]
    timing: Timing,
    #[serde(default)]
    rules: MeasuredSet<MeasuredRule>,
    #[serde(default)]
    human_tasks: MeasuredSet<MeasuredHumanTask>,
}

impl MeasuredProcessInstance {
    pub fn new(process_instance_id: i64) -> Self {
        Self {
            process_instance_id,
            timing: Timing::default(),
            rules: MeasuredSet::new(),
            human_tasks: MeasuredSet::new(),
        }
    }

    pub fn process_instance_id(&self) -> i64 {
        self.process_instance_id
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

    pub fn rules(&self) -> &MeasuredSet<MeasuredRule> {
        &self.rules
    }

    /// Count a firing of `name`, registering the rule on first sight.
    pub fn record_rule_firing(&mut self, name: &str, at: DateTime<Utc>) {
        let key = name.to_string();
        if !self.rules.contains(&key) {
            self.rules.insert(MeasuredRule::new(name));
        }
        if let Some(rule) = self.rules.get_mut(&key) {
            rule.record_firing(at);
        }
    }

    pub fn human_tasks(&self) -> &MeasuredSet<MeasuredHumanTask> {
        &self.human_tasks
    }

    pub fn add_human_task(&mut self, task: MeasuredHumanTask) -> bool {
        self.human_tasks.insert(task)
    }
}

impl Measurement for MeasuredProcessInstance {
    type Key = i64;

    fn key(&self) -> i64 {
        self.process_instance_id
    }

    fn print(&self) -> String {
        format!(
            "\n\n    Process instance: {}\n     * Number of rules fired: {}\n     * Number of human tasks: {}{}",
            self.process_instance_id,
            self.rules.len(),
            self.human_tasks.len(),
            self.timing.describe("\n     * ", "Instance")
        )
    }
}

impl PartialEq for MeasuredProcessInstance {
    fn eq(&self, other: &Self) -> bool {
        self.process_instance_id == other.process_instance_id
    }
}

impl Eq for MeasuredProcessInstance {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_rule_firing_registers_once() {
        let mut instance = MeasuredProcessInstance::new(7);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        instance.record_rule_firing("check-age", at);
        instance.record_rule_firing("check-age", at);
        instance.record_rule_firing("check-income", at);

        assert_eq!(instance.rules().len(), 2);
        assert_eq!(
            instance
                .rules()
                .get(&"check-age".to_string())
                .unwrap()
                .fire_count(),
            2
        );
    }

    #[test]
    fn test_print_completed_instance() {
        let mut instance = MeasuredProcessInstance::new(42);
        instance.set_starting_time(Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
        instance.set_ending_time(Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 3).unwrap()));
        instance.add_human_task(MeasuredHumanTask::new(1, "Approve"));

        assert_eq!(instance.time_to_complete(), Some(3000));
        assert_eq!(
            instance.print(),
            "\n\n    Process instance: 42\n     * Number of rules fired: 0\n     * Number of human tasks: 1\n     * Duration: 3000 ms (starting time = 12:00:00.000, ending time = 12:00:03.000)"
        );
    }
}
