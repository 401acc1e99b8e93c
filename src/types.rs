//! Core types for the Parliament deliberation engine
//!
//! These types carry the vocabulary shared by every stage:
//! - Seven named lenses (six consensus lenses plus the challenge lens)
//! - An ordered severity tier that only ever escalates
//! - Immutable records produced once per deliberation

use crate::profiles::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One analytic perspective in the parliament
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Lens {
    /// Interconnections, feedback loops, second-order effects
    Systems,
    /// Feasibility, resources, execution
    Practical,
    /// Data, metrics, evidence
    Analytical,
    /// Principles, values, long-term meaning
    Philosophical,
    /// Human impact, morale, communication
    Empathetic,
    /// Alternatives, reframing, questioned constraints
    Creative,
    /// Adversarial premise challenge
    Challenge,
}

impl Lens {
    /// Consensus lenses in fixed evaluation order
    pub const CONSENSUS: [Lens; 6] = [
        Lens::Systems,
        Lens::Practical,
        Lens::Analytical,
        Lens::Philosophical,
        Lens::Empathetic,
        Lens::Creative,
    ];

    /// Every lens a weight vector must cover
    pub const ALL: [Lens; 7] = [
        Lens::Systems,
        Lens::Practical,
        Lens::Analytical,
        Lens::Philosophical,
        Lens::Empathetic,
        Lens::Creative,
        Lens::Challenge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Lens::Systems => "systems",
            Lens::Practical => "practical",
            Lens::Analytical => "analytical",
            Lens::Philosophical => "philosophical",
            Lens::Empathetic => "empathetic",
            Lens::Creative => "creative",
            Lens::Challenge => "challenge",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lens::Systems => "Systems",
            Lens::Practical => "Practical",
            Lens::Analytical => "Analytical",
            Lens::Philosophical => "Philosophical",
            Lens::Empathetic => "Empathetic",
            Lens::Creative => "Creative",
            Lens::Challenge => "Challenge",
        }
    }
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Escalation level of the challenge lens.
///
/// Ordered `Low < Medium < High < Critical`; a tier can be raised by
/// [`Severity::escalate`] but never lowered.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Raise the tier to `to` if it is higher; lower targets are ignored
    pub fn escalate(&mut self, to: Severity) {
        if to > *self {
            *self = to;
        }
    }

    /// HIGH and above shift the burden of proof onto the consensus lenses
    pub fn inverts_burden(&self) -> bool {
        *self >= Severity::High
    }

    pub fn halts(&self) -> bool {
        *self == Severity::Critical
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one consensus lens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LensAnalysis {
    #[serde(rename = "name")]
    pub lens: Lens,
    pub analysis: String,
    pub recommendation: String,
    pub weight: f64,
}

/// Output of the challenge lens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChallengeRecord {
    pub analysis: String,
    /// Unique statements, base questions first, then triggered ones
    pub challenges: Vec<String>,
    pub recommendation: String,
    #[serde(rename = "confidence")]
    pub severity: Severity,
    pub weight: f64,
}

/// Final action, keyed solely on the challenge tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    DoNotProceed,
    Defer,
    ProceedWithCaution,
    Proceed,
}

impl RecommendedAction {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => RecommendedAction::DoNotProceed,
            Severity::High => RecommendedAction::Defer,
            Severity::Medium => RecommendedAction::ProceedWithCaution,
            Severity::Low => RecommendedAction::Proceed,
        }
    }

    /// Short uppercase verdict
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedAction::DoNotProceed => "DO NOT PROCEED",
            RecommendedAction::Defer => "DEFER",
            RecommendedAction::ProceedWithCaution => "PROCEED WITH CAUTION",
            RecommendedAction::Proceed => "PROCEED",
        }
    }

    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            RecommendedAction::DoNotProceed => None,
            RecommendedAction::Defer => Some("validate premise and gather missing evidence."),
            RecommendedAction::ProceedWithCaution => {
                Some("address challenges in the implementation plan.")
            }
            RecommendedAction::Proceed => Some("follow consensus guidance."),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RecommendedAction::DoNotProceed => "❌",
            RecommendedAction::Defer => "⚠️ ",
            RecommendedAction::ProceedWithCaution => "⚡",
            RecommendedAction::Proceed => "✓",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.guidance() {
            Some(guidance) => write!(f, "{} — {}", self.label(), guidance),
            None => f.write_str(self.label()),
        }
    }
}

/// Complete, immutable deliberation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliberationReport {
    #[serde(rename = "decision_prompt")]
    pub prompt: String,
    pub profile: Profile,
    /// Always true once a deliberation completes: the challenge, root-cause and
    /// constraint-awareness checks are built into every run
    pub core_triad_active: bool,
    pub challenge: ChallengeRecord,
    pub lenses: Vec<LensAnalysis>,
    pub recommended_action: RecommendedAction,
    pub synthesis: String,
}

impl DeliberationReport {
    /// Human-readable rendering
    pub fn render_text(&self) -> &str {
        &self.synthesis
    }

    /// Structured rendering with the same content
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn inversion_active(&self) -> bool {
        self.challenge.severity.inverts_burden()
    }

    pub fn halted(&self) -> bool {
        self.challenge.severity.halts()
    }
}
