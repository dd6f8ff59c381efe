// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `brms-metrics init` command - Create an empty run record.

use brms_metrics_core::{ConfigLoader, JsonReporter};

pub fn execute(config_path: &str, output: &str) -> anyhow::Result<()> {
    let config = ConfigLoader::load_file(config_path)?;
    let metrics = config.to_metrics();
    metrics.validate()?;

    let reporter = JsonReporter::new(output)?;
    let path = reporter.save(&metrics)?;

    println!("Created run {}", metrics.id());
    println!("Run record saved to: {}", path.display());
    println!("{}", metrics.print());

    Ok(())
}
