// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON and text output for test-run records.
//!
//! Runs are saved to timestamped files so later invocations can list, load and
//! re-print them.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{MetricsError, MetricsResult};
use crate::metrics::Metrics;

fn io_error(context: &'static str) -> impl FnOnce(std::io::Error) -> MetricsError {
    move |source| MetricsError::Io { context, source }
}

/// Writes run records into an output directory.
pub struct JsonReporter {
    /// Output directory for run records
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> MetricsResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).map_err(io_error("creating output directory"))?;
        Ok(Self { output_dir })
    }

    /// Open an existing output directory for reading without creating it.
    pub fn open(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn file_path(&self, metrics: &Metrics, extension: &str) -> PathBuf {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ");
        self.output_dir
            .join(format!("metrics_{}_{}.{}", timestamp, metrics.id(), extension))
    }

    /// Save a run record as pretty-printed JSON.
    ///
    /// Returns the path to the created file.
    pub fn save(&self, metrics: &Metrics) -> MetricsResult<PathBuf> {
        let filepath = self.file_path(metrics, "json");

        let file = File::create(&filepath).map_err(io_error("creating run record"))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, metrics)?;

        tracing::info!(run = %metrics.id(), path = %filepath.display(), "Saved run record");
        Ok(filepath)
    }

    /// Save the text report of a run; `all` selects the full nested report.
    pub fn save_text(&self, metrics: &Metrics, all: bool) -> MetricsResult<PathBuf> {
        let filepath = self.file_path(metrics, "txt");
        let text = if all {
            metrics.print_all()
        } else {
            metrics.print()
        };

        let mut file = File::create(&filepath).map_err(io_error("creating text report"))?;
        file.write_all(text.as_bytes())
            .map_err(io_error("writing text report"))?;

        Ok(filepath)
    }

    /// List all saved run records in the output directory, sorted by name.
    ///
    /// A missing directory holds no records.
    pub fn list_reports(&self) -> MetricsResult<Vec<PathBuf>> {
        let mut reports = Vec::new();
        if !self.output_dir.exists() {
            return Ok(reports);
        }
        for entry in fs::read_dir(&self.output_dir).map_err(io_error("reading output directory"))? {
            let entry = entry.map_err(io_error("reading output directory"))?;
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load a saved run record.
    pub fn load(path: impl AsRef<Path>) -> MetricsResult<Metrics> {
        let file = File::open(path).map_err(io_error("opening run record"))?;
        let metrics = serde_json::from_reader(file)?;
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measured::{MeasuredPackage, MeasuredProcess};
    use tempfile::TempDir;

    fn sample() -> Metrics {
        let mut metrics = Metrics::new(2, Some(true), Some(true), Some(false));
        let mut package = MeasuredPackage::new("pkg");
        package.add_process(MeasuredProcess::new("proc"));
        metrics.add_package(package);
        metrics
    }

    #[test]
    fn test_reporter_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();
        let metrics = sample();

        let path = reporter.save(&metrics).unwrap();
        assert!(path.exists());

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded, metrics);
        assert_eq!(loaded.print_all(), metrics.print_all());
    }

    #[test]
    fn test_save_text() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();
        let metrics = sample();

        let path = reporter.save_text(&metrics, true).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text, metrics.print_all());
    }

    #[test]
    fn test_list_reports_only_json() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        reporter.save(&sample()).unwrap();
        reporter.save(&sample()).unwrap();
        reporter.save_text(&sample(), false).unwrap();

        let reports = reporter.list_reports().unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_open_missing_dir_is_read_only() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("never-created");
        let reporter = JsonReporter::open(&missing);

        assert!(reporter.list_reports().unwrap().is_empty());
        assert!(!missing.exists());
    }

    #[test]
    fn test_open_lists_existing_records() {
        let temp_dir = TempDir::new().unwrap();
        JsonReporter::new(temp_dir.path())
            .unwrap()
            .save(&sample())
            .unwrap();

        let reports = JsonReporter::open(temp_dir.path()).list_reports().unwrap();
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            JsonReporter::load("/nonexistent/metrics.json"),
            Err(MetricsError::Io { .. })
        ));
    }
}
