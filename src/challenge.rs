//! Challenge Evaluator
//!
//! The adversarial lens. It always reframes the problem before accepting the
//! solution space, and escalates a severity tier from fixed prompt triggers.
//!
//! Escalation rules:
//! - Start at MEDIUM with five base questions
//! - Each matching trigger raises the tier (never lowers it) and appends its
//!   statement once, in trigger-table order
//! - CRITICAL is never reached by triggers; callers set it explicitly via
//!   [`ChallengeRecord::with_severity`]

use crate::types::{ChallengeRecord, Severity};

/// Premise questions present in every challenge, in order
pub const BASE_CHALLENGES: [&str; 5] = [
    "Is this the right problem to solve?",
    "What assumptions are we making without evidence?",
    "Are we treating symptoms instead of root causes?",
    "What evidence would change our minds?",
    "Who benefits from this framing of the problem?",
];

/// A prompt substring check that escalates the challenge
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    /// Any of these (lowercase) substrings fires the trigger
    pub keywords: &'static [&'static str],
    pub severity: Severity,
    pub challenge: &'static str,
}

impl Trigger {
    pub fn matches(&self, prompt_lower: &str) -> bool {
        self.keywords.iter().any(|kw| prompt_lower.contains(kw))
    }
}

/// Trigger checks in evaluation order
pub const TRIGGERS: &[Trigger] = &[
    Trigger {
        keywords: &["migrate", "replace"],
        severity: Severity::High,
        challenge: "⚠️  SUNK COST ALERT: Are we justifying past investment?",
    },
    Trigger {
        keywords: &["urgent", "quickly"],
        severity: Severity::High,
        challenge: "⚠️  URGENCY BIAS: Is artificial pressure overriding analysis?",
    },
];

const STARTING_SEVERITY: Severity = Severity::Medium;

fn build_analysis(prompt: &str) -> String {
    format!(
        "Challenge examination of: {}\n\
         ⚠️  PREMISE CHALLENGE (problem definition validation)\n\
         - Questioning whether this is the right problem\n\
         - Identifying hidden assumptions and biases\n\
         - Checking for architectural vs. tactical framing\n\
         - Recognizing substrate constraints (organizational, technical, cognitive)",
        prompt
    )
}

/// Recommendation text with the tier embedded verbatim
pub fn recommendation_for(severity: Severity) -> String {
    format!(
        "[{}] Require premise validation before solution discussion. \
         Apply Core Triad: Architectural root cause + Challenge assumptions + \
         Acknowledge substrate constraints.",
        severity
    )
}

/// Run the challenge lens against a prompt
pub fn evaluate(prompt: &str, weight: f64) -> ChallengeRecord {
    let prompt_lower = prompt.to_lowercase();
    let mut record = ChallengeRecord::new(prompt, STARTING_SEVERITY, weight);

    for trigger in TRIGGERS.iter().filter(|t| t.matches(&prompt_lower)) {
        tracing::debug!(
            severity = %trigger.severity,
            keywords = ?trigger.keywords,
            "challenge trigger fired"
        );
        record.escalate(trigger.severity);
        record.push_challenge(trigger.challenge);
    }

    record
}

impl ChallengeRecord {
    /// Base record for `prompt` at `severity`, carrying only the base questions
    pub fn new(prompt: &str, severity: Severity, weight: f64) -> Self {
        Self {
            analysis: build_analysis(prompt),
            challenges: BASE_CHALLENGES.iter().map(|s| s.to_string()).collect(),
            recommendation: recommendation_for(severity),
            severity,
            weight,
        }
    }

    /// Set the tier explicitly (the only way to reach CRITICAL).
    ///
    /// Unlike [`ChallengeRecord::escalate`] this may also lower the tier; it
    /// is a construction step, not an accumulation step.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self.recommendation = recommendation_for(severity);
        self
    }

    /// Raise the tier, keeping the recommendation in sync
    pub fn escalate(&mut self, to: Severity) {
        self.severity.escalate(to);
        self.recommendation = recommendation_for(self.severity);
    }

    /// Append a statement unless it is already present
    pub fn push_challenge(&mut self, statement: &str) -> bool {
        if self.challenges.iter().any(|c| c == statement) {
            return false;
        }
        self.challenges.push(statement.to_string());
        true
    }

    /// Statements added beyond the base questions
    pub fn triggered(&self) -> &[String] {
        self.challenges.get(BASE_CHALLENGES.len()..).unwrap_or(&[])
    }
}
