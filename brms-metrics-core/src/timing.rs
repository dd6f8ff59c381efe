// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Start/end timestamps shared by every timed record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clock-time pattern used in all reports: `HH:mm:ss.SSS`, 24-hour, no date.
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Format a timestamp as `HH:mm:ss.SSS` (UTC).
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Optional starting and ending moments of a timed activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_time: Option<DateTime<Utc>>,
}

impl Timing {
    /// Timing with both bounds set.
    pub fn between(starting_time: DateTime<Utc>, ending_time: DateTime<Utc>) -> Self {
        Self {
            starting_time: Some(starting_time),
            ending_time: Some(ending_time),
        }
    }

    /// Elapsed milliseconds, or `None` unless both bounds are set.
    pub fn time_to_complete(&self) -> Option<i64> {
        match (self.starting_time, self.ending_time) {
            (Some(start), Some(end)) => Some(end.timestamp_millis() - start.timestamp_millis()),
            _ => None,
        }
    }

    /// Render the three-way duration line.
    ///
    /// `prefix` is prepended verbatim; `subject` names the activity in the
    /// "started"/"not started" variants. An ending time without a starting
    /// time has no duration and reads as not started.
    pub fn describe(&self, prefix: &str, subject: &str) -> String {
        match (self.starting_time, self.ending_time) {
            (Some(start), Some(end)) => format!(
                "{prefix}Duration: {} ms (starting time = {}, ending time = {})",
                end.timestamp_millis() - start.timestamp_millis(),
                format_time(&start),
                format_time(&end)
            ),
            (Some(start), None) => format!(
                "{prefix}{subject} started at {} but did not end yet.",
                format_time(&start)
            ),
            (None, _) => format!("{prefix}{subject} not started yet."),
        }
    }
}
