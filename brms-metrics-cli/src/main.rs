// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! brms-metrics CLI
//!
//! Command-line interface for BRMS test-run metrics records.

use clap::{Parser, Subcommand};

mod commands;

/// brms-metrics - Test-run metrics for rules and process execution harnesses
#[derive(Parser)]
#[command(name = "brms-metrics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a run configuration file
    Validate {
        /// Path to the run configuration YAML file
        file: String,
    },

    /// Create an empty run record from a configuration file
    Init {
        /// Path to the run configuration YAML file
        config: String,

        /// Output directory for run records
        #[arg(short, long, default_value = "data")]
        output: String,
    },

    /// Print the report of a saved run record
    Report {
        /// Path to the run record JSON file
        file: String,

        /// Include every package, process, instance, rule and human task
        #[arg(short, long)]
        all: bool,

        /// Also write the report as a text file into this directory
        #[arg(short, long)]
        save: Option<String>,
    },

    /// List saved run records
    List {
        /// Directory holding run records
        #[arg(short, long, default_value = "data")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Validate { file } => commands::validate::execute(&file),
        Commands::Init { config, output } => commands::init::execute(&config, &output),
        Commands::Report { file, all, save } => {
            commands::report::execute(&file, all, save.as_deref())
        }
        Commands::List { output } => commands::list::execute(&output),
    }
}
