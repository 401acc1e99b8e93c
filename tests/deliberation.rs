//! End-to-end deliberation scenarios through the public API.

use parliament::challenge::{self, BASE_CHALLENGES};
use parliament::synthesis::{HALT_NOTICE, INVERSION_NOTICE};
use parliament::{
    compose, ChallengeRecord, Lens, LensAnalysis, Parliament, Profile, RecommendedAction,
    Severity,
};

#[test]
fn migrate_prompt_with_analytical_profile_defers() {
    let report = Parliament::with_profile_name("analytical").deliberate("Should we migrate to GraphQL?");

    assert_eq!(report.challenge.severity, Severity::High);
    assert_eq!(report.recommended_action, RecommendedAction::Defer);
    assert!(report.synthesis.contains("DEFER"));
    assert!(report.synthesis.contains(INVERSION_NOTICE));
    assert!(!report.synthesis.contains(HALT_NOTICE));
    assert!(report.inversion_active());
    assert!(!report.halted());
    assert_eq!(report.profile, Profile::Analytical);
}

#[test]
fn quickly_prompt_appends_exactly_one_statement() {
    let report = Parliament::with_profile_name("balanced").deliberate("Ship this quickly");

    assert_eq!(report.challenge.severity, Severity::High);
    assert_eq!(report.challenge.challenges.len(), BASE_CHALLENGES.len() + 1);
    assert_eq!(
        report.challenge.triggered(),
        &[challenge::TRIGGERS[1].challenge.to_string()]
    );
}

#[test]
fn critical_overrides_uniformly_positive_lenses() {
    let lenses: Vec<LensAnalysis> = Lens::CONSENSUS
        .iter()
        .map(|&lens| LensAnalysis {
            lens,
            analysis: format!("{} says this is clearly right", lens.title()),
            recommendation: "PROCEED — no objections.".to_string(),
            weight: 1.5,
        })
        .collect();
    let challenge =
        ChallengeRecord::new("Deploy on Friday", Severity::Low, 1.0).with_severity(Severity::Critical);

    let report = compose("Deploy on Friday", Profile::Practical, lenses, challenge);

    assert_eq!(report.recommended_action, RecommendedAction::DoNotProceed);
    assert_eq!(report.recommended_action.to_string(), "DO NOT PROCEED");
    assert!(report.synthesis.contains(HALT_NOTICE));
    assert!(report.synthesis.contains(INVERSION_NOTICE));
}

#[test]
fn neutral_prompt_proceeds_with_caution() {
    let report = Parliament::default().deliberate("Which logging format should we standardise on?");
    assert_eq!(report.challenge.severity, Severity::Medium);
    assert_eq!(report.recommended_action, RecommendedAction::ProceedWithCaution);
    assert!(!report.synthesis.contains(INVERSION_NOTICE));
}

#[test]
fn lenses_in_fixed_order_with_profile_weights() {
    let report = Parliament::new(Profile::Empathetic).deliberate("Reorganise the team?");
    let order: Vec<Lens> = report.lenses.iter().map(|l| l.lens).collect();
    assert_eq!(order, Lens::CONSENSUS.to_vec());
    for record in &report.lenses {
        assert_eq!(record.weight, Profile::Empathetic.weights().get(record.lens));
    }
    assert_eq!(report.challenge.weight, 1.0);
}

#[test]
fn json_rendering_carries_same_content() {
    let report = Parliament::with_profile_name("creative").deliberate("Replace Jenkins urgently?");
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["decision_prompt"], "Replace Jenkins urgently?");
    assert_eq!(json["profile"], "creative");
    assert_eq!(json["core_triad_active"], true);
    assert_eq!(json["challenge"]["confidence"], "HIGH");
    assert_eq!(json["challenge"]["challenges"].as_array().unwrap().len(), 7);
    assert_eq!(json["lenses"].as_array().unwrap().len(), 6);
    assert_eq!(json["lenses"][0]["name"], "systems");
    assert_eq!(json["recommended_action"], "DEFER");
    assert_eq!(json["synthesis"], report.render_text());

    let back: parliament::DeliberationReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
