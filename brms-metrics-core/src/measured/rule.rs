// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Rule firings observed within one process instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Measurement;
use crate::timing::format_time;

/// Firing statistics of a single rule, keyed by rule name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredRule {
    name: String,
    #[serde(default)]
    fire_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_fired: Option<DateTime<Utc>>,
}

impl MeasuredRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fire_count: 0,
            last_fired: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fire_count(&self) -> u32 {
        self.fire_count
    }

    pub fn last_fired(&self) -> Option<DateTime<Utc>> {
        self.last_fired
    }

    /// Count one more firing at the given moment.
    pub fn record_firing(&mut self, at: DateTime<Utc>) {
        self.fire_count = self.fire_count.saturating_add(1);
        self.last_fired = Some(at);
    }
}

impl Measurement for MeasuredRule {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn print(&self) -> String {
        let mut out = format!(
            "\n      Rule: {}\n       * Times fired: {}",
            self.name, self.fire_count
        );
        if let Some(at) = &self.last_fired {
            out.push_str(&format!("\n       * Last fired at {}", format_time(at)));
        }
        out
    }
}

impl PartialEq for MeasuredRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MeasuredRule {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_firing() {
        let mut rule = MeasuredRule::new("approve-loan");
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
        rule.record_firing(at);
        rule.record_firing(at);

        assert_eq!(rule.fire_count(), 2);
        assert_eq!(rule.last_fired(), Some(at));
        assert_eq!(
            rule.print(),
            "\n      Rule: approve-loan\n       * Times fired: 2\n       * Last fired at 14:30:00.000"
        );
    }

    #[test]
    fn test_print_never_fired() {
        let rule = MeasuredRule::new("idle");
        assert_eq!(rule.print(), "\n      Rule: idle\n       * Times fired: 0");
    }
}
