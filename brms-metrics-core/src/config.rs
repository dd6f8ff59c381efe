// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML run configuration with strict validation.
//!
//! A run configuration describes how a test run is set up and which packages
//! and processes it exercises. Any invalid field results in a ValidationError
//! before a metrics record is ever created.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MetricsError, MetricsResult, ValidationError};
use crate::measured::{MeasuredPackage, MeasuredProcess};
use crate::metrics::Metrics;

/// Raw run settings as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawRunSettings {
    number_of_machines: Option<u32>,
    #[serde(default)]
    load_balancing_used: Option<bool>,
    #[serde(default)]
    processes_started_in_parallel: Option<bool>,
    #[serde(default)]
    processes_run_in_individual_knowledge_session: Option<bool>,
}

/// Raw package entry.
#[derive(Debug, Deserialize)]
struct RawPackageConfig {
    name: String,
    #[serde(default)]
    processes: Vec<String>,
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    run: RawRunSettings,
    #[serde(default)]
    packages: Vec<RawPackageConfig>,
}

/// Validated package entry.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    pub name: String,
    pub processes: Vec<String>,
}

/// Complete validated run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub number_of_machines: u32,
    pub load_balancing_used: Option<bool>,
    pub processes_started_in_parallel: Option<bool>,
    pub processes_run_in_individual_knowledge_session: Option<bool>,
    pub packages: Vec<PackageConfig>,
}

impl RunConfig {
    /// Build a fresh metrics record with the configured packages and
    /// processes registered. Timestamps stay unset.
    pub fn to_metrics(&self) -> Metrics {
        let mut metrics = Metrics::new(
            self.number_of_machines,
            self.load_balancing_used,
            self.processes_started_in_parallel,
            self.processes_run_in_individual_knowledge_session,
        );
        for package_config in &self.packages {
            let mut package = MeasuredPackage::new(package_config.name.clone());
            for process_id in &package_config.processes {
                package.add_process(MeasuredProcess::new(process_id.clone()));
            }
            metrics.add_package(package);
        }
        metrics
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a run configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> MetricsResult<RunConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MetricsError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| MetricsError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate a run configuration from a YAML string.
    pub fn load_string(content: &str) -> MetricsResult<RunConfig> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| MetricsError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> MetricsResult<RunConfig> {
        let number_of_machines =
            raw.run
                .number_of_machines
                .ok_or(ValidationError::MissingRequiredField {
                    field: "number_of_machines",
                    context: "run".to_string(),
                })?;

        let mut seen_packages = HashSet::new();
        let mut packages = Vec::with_capacity(raw.packages.len());

        for raw_package in raw.packages {
            let name = raw_package.name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::InvalidFieldValue {
                    field: "packages.name",
                    value: raw_package.name,
                    reason: "Package name cannot be empty".to_string(),
                }
                .into());
            }
            if !seen_packages.insert(name.clone()) {
                return Err(ValidationError::DuplicatePackage { name }.into());
            }

            let mut seen_processes = HashSet::new();
            let mut processes = Vec::with_capacity(raw_package.processes.len());
            for process_id in raw_package.processes {
                let process_id = process_id.trim().to_string();
                if process_id.is_empty() {
                    return Err(ValidationError::InvalidFieldValue {
                        field: "packages.processes",
                        value: process_id,
                        reason: format!("Empty process id in package '{}'", name),
                    }
                    .into());
                }
                if !seen_processes.insert(process_id.clone()) {
                    return Err(ValidationError::DuplicateProcess {
                        package: name,
                        process_id,
                    }
                    .into());
                }
                processes.push(process_id);
            }

            packages.push(PackageConfig { name, processes });
        }

        tracing::debug!(
            number_of_machines,
            packages = packages.len(),
            "Validated run configuration"
        );

        Ok(RunConfig {
            number_of_machines,
            load_balancing_used: raw.run.load_balancing_used,
            processes_started_in_parallel: raw.run.processes_started_in_parallel,
            processes_run_in_individual_knowledge_session: raw
                .run
                .processes_run_in_individual_knowledge_session,
            packages,
        })
    }
}
