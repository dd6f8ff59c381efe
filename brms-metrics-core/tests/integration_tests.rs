// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end integration tests for brms-metrics.
//!
//! These tests walk a run from configuration through recording to reports.

use std::thread;

use brms_metrics_core::{
    ConfigLoader, JsonReporter, MeasuredHumanTask, MeasuredProcessInstance, Measurement,
    MetricsStore,
};
use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

const RUN_CONFIG: &str = r#"
run:
  number_of_machines: 2
  load_balancing_used: true
  processes_started_in_parallel: true
  processes_run_in_individual_knowledge_session: false
packages:
  - name: org.jboss.brms.test
    processes:
      - com.sample.evaluation
"#;

/// Test a full run: config file, recording, store, JSON and text reports
#[test]
fn test_run_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("run.yaml");
    std::fs::write(&config_path, RUN_CONFIG).expect("Failed to write config");

    let config = ConfigLoader::load_file(&config_path).expect("Config should be valid");
    let mut metrics = config.to_metrics();

    let start = Utc.with_ymd_and_hms(2024, 9, 1, 16, 20, 0).unwrap();
    metrics.set_starting_time(Some(start));

    {
        let process = metrics
            .package_mut("org.jboss.brms.test")
            .and_then(|p| p.process_mut("com.sample.evaluation"))
            .expect("Configured process should be registered");

        for id in 1..=3 {
            let mut instance = MeasuredProcessInstance::new(id);
            instance.set_starting_time(Some(start));
            instance.set_ending_time(Some(start + Duration::milliseconds(id * 100)));
            instance.record_rule_firing("score-applicant", start);
            let mut task = MeasuredHumanTask::new(id * 10, "Review");
            task.set_starting_time(Some(start));
            task.set_ending_time(Some(start + Duration::milliseconds(50)));
            instance.add_human_task(task);
            assert!(process.add_instance(instance));
        }
        assert_eq!(process.average_time_to_complete(), Some(200.0));
    }

    metrics.set_ending_time(Some(start + Duration::milliseconds(1500)));
    assert_eq!(metrics.time_to_complete(), Some(1500));

    let store = MetricsStore::new();
    let id = store.save(metrics).expect("Run should be valid");
    let stored = store.get(&id).unwrap();

    let summary = stored.print();
    assert!(summary.ends_with(
        "\n\n * Duration: 1500 ms (starting time = 16:20:00.000, ending time = 16:20:01.500)"
    ));

    let full = stored.print_all();
    assert!(full.starts_with(&summary));
    assert_eq!(full.matches("Process instance:").count(), 3);
    assert_eq!(full.matches("Rule: score-applicant").count(), 3);
    assert_eq!(full.matches("Human task: Review").count(), 3);

    // Each instance block is followed directly by its rule and task blocks.
    let package = stored.packages().iter().next().unwrap();
    let process = package.processes().iter().next().unwrap();
    for instance in process.instances() {
        let rule = instance.rules().iter().next().unwrap();
        let task = instance.human_tasks().iter().next().unwrap();
        let block = format!("{}{}{}", instance.print(), rule.print(), task.print());
        assert!(full.contains(&block), "Missing nested block for instance");
    }

    let reporter = JsonReporter::new(temp_dir.path().join("out")).unwrap();
    let path = reporter.save(&stored).unwrap();
    let loaded = JsonReporter::load(&path).unwrap();
    assert_eq!(loaded, stored);
    assert_eq!(loaded.time_to_complete(), Some(1500));
    assert_eq!(
        loaded.packages().iter().next().unwrap().processes().len(),
        1
    );

    let removed = store.delete(&id).unwrap();
    assert_eq!(removed.packages().len(), 1);
    assert!(store.is_empty());
}

/// Test concurrent saves into a shared store
#[test]
fn test_concurrent_store_access() {
    let store = MetricsStore::new_shared();

    let handles: Vec<_> = (1..=8)
        .map(|machines| {
            let store = store.clone();
            thread::spawn(move || {
                let config = ConfigLoader::load_string(&format!(
                    "run:\n  number_of_machines: {}\n",
                    machines
                ))
                .unwrap();
                store.save(config.to_metrics()).unwrap()
            })
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(store.len(), 8);
    for id in ids {
        assert!(store.contains(&id));
    }
}

/// Test that an invalid config never produces a record
#[test]
fn test_invalid_config_rejected() {
    let result = ConfigLoader::load_string(
        r#"
run:
  load_balancing_used: false
"#,
    );
    let err = result.expect_err("Missing machine count must be rejected");
    assert!(err.to_string().contains("number_of_machines"));
}
