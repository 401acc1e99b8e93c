//! Synthesis Composer
//!
//! Combines the consensus lenses and the challenge lens into one report.
//!
//! Policy is a four-state table keyed solely on the challenge tier:
//! - The challenge block is always displayed first
//! - HIGH and CRITICAL add the inversion notice (burden of proof shifts)
//! - CRITICAL adds the halt notice and forces DO NOT PROCEED
//! - Lens content is advisory; it never changes the recommended action

use crate::challenge;
use crate::lenses;
use crate::profiles::Profile;
use crate::types::*;

const RULE_WIDTH: usize = 70;

pub const INVERSION_NOTICE: &str = "⚠️  INVERSION PROTOCOL ACTIVE\n\
    Burden of proof has shifted to the consensus lenses.\n\
    Challenge objections must be explicitly addressed before proceeding.\n";

pub const HALT_NOTICE: &str = "🛑 HALT\n\
    Do not proceed until challenge concerns are resolved.\n";

/// Compose the final report. Deterministic for identical inputs.
pub fn compose(
    prompt: &str,
    profile: Profile,
    lenses: Vec<LensAnalysis>,
    challenge: ChallengeRecord,
) -> DeliberationReport {
    let recommended_action = RecommendedAction::for_severity(challenge.severity);
    let synthesis = render(prompt, profile, &lenses, &challenge, recommended_action);

    DeliberationReport {
        prompt: prompt.to_string(),
        profile,
        core_triad_active: true,
        challenge,
        lenses,
        recommended_action,
        synthesis,
    }
}

fn render(
    prompt: &str,
    profile: Profile,
    lenses: &[LensAnalysis],
    challenge: &ChallengeRecord,
    action: RecommendedAction,
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{heavy}\nPARLIAMENT SYNTHESIS\n{heavy}\n\n"));
    out.push_str(&format!("Decision: {}\n", prompt));
    out.push_str(&format!("Profile: {}\n\n", profile.name().to_uppercase()));

    // Challenge gets priority display
    out.push_str(&format!("{light}\nCHALLENGE [{}]\n{light}\n", challenge.severity));
    out.push_str(&challenge.analysis);
    out.push_str("\n\nChallenges:\n");
    for statement in &challenge.challenges {
        out.push_str(&format!("  • {}\n", statement));
    }
    out.push_str(&format!("\n→ {}\n\n", challenge.recommendation));

    if challenge.severity.inverts_burden() {
        out.push_str(INVERSION_NOTICE);
        out.push('\n');
    }
    if challenge.severity.halts() {
        out.push_str(HALT_NOTICE);
        out.push('\n');
    }

    out.push_str(&format!("{light}\nCONSENSUS LENSES\n{light}\n\n"));
    for lens in lenses {
        out.push_str(&format!(
            "{} (weight: {:.1})\n→ {}\n\n",
            lens.lens.title().to_uppercase(),
            lens.weight,
            lens.recommendation
        ));
    }

    out.push_str(&format!("{light}\nRECOMMENDED PATH\n{light}\n\n"));
    out.push_str(&format!("{} {}\n", action.emoji(), action));
    out.push_str(match challenge.severity {
        Severity::Critical => {
            "Challenge at CRITICAL overrides every lens recommendation.\n\
             Address architectural concerns before any tactical action.\n"
        }
        Severity::High => "Challenge at HIGH indicates foundational concerns.\n",
        Severity::Medium => "Consider a phased, validated approach.\n",
        Severity::Low => "Challenge concerns are manageable.\n",
    });
    out.push_str(&format!("\n{heavy}\n"));

    out
}

/// The deliberation engine: resolves a profile once, then deliberates on prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct Parliament {
    profile: Profile,
}

impl Parliament {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Build from a free-form profile name (unknown names become `balanced`)
    pub fn with_profile_name(name: &str) -> Self {
        Self::new(Profile::resolve(name))
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Run a full deliberation on a decision prompt
    pub fn deliberate(&self, prompt: &str) -> DeliberationReport {
        let weights = self.profile.weights();

        // 1. Consensus lenses, fixed order
        let lens_records = lenses::evaluate_all(prompt, weights);

        // 2. Challenge lens, independent of the consensus lenses
        let challenge = challenge::evaluate(prompt, weights.get(Lens::Challenge));

        tracing::debug!(
            profile = %self.profile,
            severity = %challenge.severity,
            "deliberation complete"
        );

        // 3. Compose
        compose(prompt, self.profile, lens_records, challenge)
    }
}
