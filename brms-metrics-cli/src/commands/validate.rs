// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `brms-metrics validate` command - Validate a run configuration file.

use brms_metrics_core::ConfigLoader;

fn describe(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unspecified",
    }
}

pub fn execute(file: &str) -> anyhow::Result<()> {
    tracing::info!(file = %file, "Validating run configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Run Settings:");
            println!("  Machines:                     {}", config.number_of_machines);
            println!(
                "  Load balancing:               {}",
                describe(config.load_balancing_used)
            );
            println!(
                "  Started in parallel:          {}",
                describe(config.processes_started_in_parallel)
            );
            println!(
                "  Individual knowledge session: {}",
                describe(config.processes_run_in_individual_knowledge_session)
            );
            println!();
            println!("Packages ({}):", config.packages.len());
            for package in &config.packages {
                println!("  - {} ({} process(es))", package.name, package.processes.len());
                for process_id in &package.processes {
                    println!("      {}", process_id);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
