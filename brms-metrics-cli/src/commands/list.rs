// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `brms-metrics list` command - List saved run records.

use brms_metrics_core::{format_time, JsonReporter};

pub fn execute(output: &str) -> anyhow::Result<()> {
    let reporter = JsonReporter::open(output);
    let reports = reporter.list_reports()?;

    if reports.is_empty() {
        println!("No run records in {}.", reporter.output_dir().display());
        return Ok(());
    }

    println!(
        "{:<38} {:>8} {:>9} {:>14} {:>12}",
        "RUN", "MACHINES", "PACKAGES", "STARTED", "DURATION"
    );

    for path in &reports {
        match JsonReporter::load(path) {
            Ok(metrics) => {
                let started = metrics
                    .starting_time()
                    .map(|t| format_time(&t))
                    .unwrap_or_else(|| "-".to_string());
                let duration = metrics
                    .time_to_complete()
                    .map(|ms| format!("{} ms", ms))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<38} {:>8} {:>9} {:>14} {:>12}",
                    metrics.id().to_string(),
                    metrics.number_of_machines(),
                    metrics.packages().len(),
                    started,
                    duration
                );
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable run record");
            }
        }
    }

    println!();
    println!("Total: {} run(s)", reports.len());

    Ok(())
}
