//! Custom error types for brms-metrics.
//!
//! The metrics record itself never fails. Everything around it (configuration,
//! the record store, the reporter) reports failures through these explicit
//! enums. No `Box<dyn Error>`, no `anyhow::Result` inside the library.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Identity;

/// Top-level error type for the metrics library.
#[derive(Debug, Error)]
pub enum MetricsError {
    // =========================================================================
    // Validation & Configuration Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Store Errors
    // =========================================================================
    #[error("Test run not found: {0}")]
    RunNotFound(Identity),

    #[error("Test run already exists: {0}")]
    RunAlreadyExists(Identity),

    // =========================================================================
    // Reporter Errors
    // =========================================================================
    #[error("Failed to serialize run record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors for run configurations and records about to be stored.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate package: {name}")]
    DuplicatePackage { name: String },

    #[error("Duplicate process {process_id} in package {package}")]
    DuplicateProcess { package: String, process_id: String },
}

/// Result type alias using MetricsError.
pub type MetricsResult<T> = Result<T, MetricsError>;
