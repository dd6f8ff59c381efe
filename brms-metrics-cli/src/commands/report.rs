// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `brms-metrics report` command - Print a saved run record.

use brms_metrics_core::JsonReporter;

pub fn execute(file: &str, all: bool, save: Option<&str>) -> anyhow::Result<()> {
    tracing::info!(file = %file, all, "Loading run record");

    let metrics = JsonReporter::load(file)?;
    let text = if all {
        metrics.print_all()
    } else {
        metrics.print()
    };
    println!("{}", text);

    if let Some(dir) = save {
        let path = JsonReporter::new(dir)?.save_text(&metrics, all)?;
        println!();
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}
