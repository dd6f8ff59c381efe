//! brms-metrics Core Library
//!
//! Metrics records for runs of a business-rules / process-execution test
//! harness: the per-run `Metrics` record, the measured package → process →
//! instance → rule / human-task hierarchy, run configuration parsing, an
//! in-memory record store and JSON/text reporting.

pub mod config;
pub mod error;
pub mod measured;
pub mod metrics;
pub mod reporter;
pub mod store;
pub mod timing;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigLoader, PackageConfig, RunConfig};
pub use error::{MetricsError, MetricsResult, ValidationError};
pub use measured::{
    MeasuredHumanTask, MeasuredPackage, MeasuredProcess, MeasuredProcessInstance, MeasuredRule,
    MeasuredSet, Measurement,
};
pub use metrics::Metrics;
pub use reporter::JsonReporter;
pub use store::MetricsStore;
pub use timing::{format_time, Timing, TIME_FORMAT};
pub use types::Identity;
