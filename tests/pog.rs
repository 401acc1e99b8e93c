//! POG scoring across the export/import boundary.

use parliament::pog::{self, CycleLog, Interpretation, OutputType, Temptation, TestCycle};
use parliament::Error;
use std::fs;
use tempfile::TempDir;

fn log_of(outputs: &[&str]) -> CycleLog {
    let mut log = CycleLog::new();
    for (i, output) in outputs.iter().enumerate() {
        log.add_cycle(TestCycle::new(format!("prompt {i}"), "response", *output));
    }
    log
}

#[test]
fn half_to_full_preservation_is_significant() {
    let baseline = log_of(&["UNDECIDABLE", "FORCED_SYNTHESIS"]);
    let treatment = log_of(&["UNDECIDABLE", "CANNOT_FORECAST"]);

    assert_eq!(pog::score(baseline.cycles()), 0.5);
    assert_eq!(pog::score(treatment.cycles()), 1.0);

    let report = pog::delta(baseline.cycles(), treatment.cycles());
    assert_eq!(report.delta, 0.5);
    assert_eq!(report.interpretation, Interpretation::Positive);
    assert!(report.interpretation.label().contains("significantly helps"));
}

#[test]
fn empty_condition_reports_zero_with_count() {
    let treatment = log_of(&["UNDECIDABLE"]);
    let report = pog::delta(&[], treatment.cycles());
    assert_eq!(report.pog_baseline, 0.0);
    assert_eq!(report.baseline_n, 0);
    assert_eq!(report.delta, 1.0);
}

#[test]
fn export_then_import_preserves_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("runs").join("session.json");

    let mut log = CycleLog::new();
    log.add_cycle(
        TestCycle::new("Pivot?", "⚠️ GUIDANCE_WITHHELD", "GUIDANCE_WITHHELD")
            .with_resisted([Temptation::DefaultEscape])
            .with_meta("condition", "baseline")
            .with_meta("attempt", 3),
    );
    log.add_cycle(
        TestCycle::new("Forecast?", "It will be fine", "SOMETHING_CUSTOM")
            .with_detected(["PATTERN_MATCHING_ESCAPE", "HOMEGROWN_TAG"])
            .with_timestamp("2026-03-01T12:00:00"),
    );
    log.export(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["total_cycles"], 2);
    assert_eq!(raw["session_id"], log.session_id().to_string());
    assert_eq!(raw["cycles"][1]["output_type"], "SOMETHING_CUSTOM");
    assert_eq!(raw["cycles"][1]["temptations_detected"][1], "HOMEGROWN_TAG");
    assert_eq!(raw["cycles"][0]["metadata"]["attempt"], 3);

    let loaded = pog::load_cycles(&path).unwrap();
    assert_eq!(loaded, log.cycles());
    assert_eq!(
        loaded[1].output_type,
        OutputType::Unrecognized("SOMETHING_CUSTOM".to_string())
    );
}

#[test]
fn directory_import_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    log_of(&["UNDECIDABLE"]).export(&dir.path().join("a.json")).unwrap();
    log_of(&["NORMAL", "NORMAL"]).export(&dir.path().join("b.json")).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let mut log = CycleLog::new();
    let count = log.import(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(count, 3);
    assert_eq!(log.cycles()[0].output_type, OutputType::Undecidable);

    // A record missing `response` poisons the whole batch
    fs::write(
        dir.path().join("c.json"),
        r#"[{"timestamp": "t", "prompt": "p", "output_type": "NORMAL",
            "temptations_detected": [], "temptations_resisted": [],
            "contains_uncertainty": false, "metadata": {}}]"#,
    )
    .unwrap();

    let mut fresh = CycleLog::new();
    let err = fresh.import(&[dir.path().to_path_buf()]).unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
    assert!(fresh.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = pog::load_cycles(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn new_temptations_only_from_treatment() {
    let (baseline, treatment) = pog::demo_session();
    let new = pog::new_temptations(baseline.cycles(), treatment.cycles());
    assert!(new.contains(&Temptation::SubstrateAppeal));
    assert!(new.contains(&Temptation::InformedRationalization));

    // Resisted tags never count as detections
    assert!(pog::new_temptations(treatment.cycles(), baseline.cycles()).is_empty());
}

#[test]
fn report_renders_both_conditions() {
    let (baseline, treatment) = pog::demo_session();
    let text = pog::generate_report(baseline.cycles(), treatment.cycles());

    assert!(text.contains("## Baseline Condition (No Substrate Access)"));
    assert!(text.contains("## Treatment Condition (With Substrate Access)"));
    assert!(text.contains("- GUIDANCE_WITHHELD: 1"));
    assert!(text.contains("- FORCED_SYNTHESIS: 1"));
    assert!(text.contains("**Interpretation**: NEGATIVE"));
}
