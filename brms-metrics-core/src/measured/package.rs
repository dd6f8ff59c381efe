// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! A knowledge package used in a test run.

use serde::{Deserialize, Serialize};

use super::{MeasuredProcess, MeasuredSet, Measurement};

/// The processes measured from one package, keyed by package name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasuredPackage {
    name: String,
    #[serde(default)]
    processes: MeasuredSet<MeasuredProcess>,
}

impl MeasuredPackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            processes: MeasuredSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn processes(&self) -> &MeasuredSet<MeasuredProcess> {
        &self.processes
    }

    pub fn add_process(&mut self, process: MeasuredProcess) -> bool {
        self.processes.insert(process)
    }

    pub fn process_mut(&mut self, process_id: &str) -> Option<&mut MeasuredProcess> {
        self.processes.get_mut(&process_id.to_string())
    }
}

impl Measurement for MeasuredPackage {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn print(&self) -> String {
        format!(
            "\n\nPackage: {}\n * Number of processes: {}",
            self.name,
            self.processes.len()
        )
    }
}

impl PartialEq for MeasuredPackage {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MeasuredPackage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_print() {
        let mut package = MeasuredPackage::new("org.jboss.brms.test");
        package.add_process(MeasuredProcess::new("a"));
        package.add_process(MeasuredProcess::new("b"));
        package.add_process(MeasuredProcess::new("a"));

        assert_eq!(
            package.print(),
            "\n\nPackage: org.jboss.brms.test\n * Number of processes: 2"
        );
        assert!(package.process_mut("b").is_some());
        assert!(package.process_mut("c").is_none());
    }
}
