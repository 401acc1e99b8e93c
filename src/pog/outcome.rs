//! Outcome categories and temptation tags
//!
//! Both vocabularies are closed enums matched exhaustively. Strings outside the
//! vocabulary survive a round-trip verbatim in an explicit `Unrecognized`
//! variant; an unrecognized category never counts as preserving uncertainty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an output category relates to acknowledged uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// Uncertainty kept open
    Preserving,
    /// Uncertainty forced into false certainty
    Collapsing,
    Neutral,
    Unrecognized,
}

/// Recorded category of one evaluation outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputType {
    Undecidable,
    GuidanceWithheld,
    CannotForecast,
    ForcedSynthesis,
    PrematureResolution,
    Rationalization,
    DefaultEscape,
    Normal,
    Unrecognized(String),
}

impl OutputType {
    pub const KNOWN: [OutputType; 8] = [
        OutputType::Undecidable,
        OutputType::GuidanceWithheld,
        OutputType::CannotForecast,
        OutputType::ForcedSynthesis,
        OutputType::PrematureResolution,
        OutputType::Rationalization,
        OutputType::DefaultEscape,
        OutputType::Normal,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OutputType::Undecidable => "UNDECIDABLE",
            OutputType::GuidanceWithheld => "GUIDANCE_WITHHELD",
            OutputType::CannotForecast => "CANNOT_FORECAST",
            OutputType::ForcedSynthesis => "FORCED_SYNTHESIS",
            OutputType::PrematureResolution => "PREMATURE_RESOLUTION",
            OutputType::Rationalization => "RATIONALIZATION",
            OutputType::DefaultEscape => "DEFAULT_ESCAPE",
            OutputType::Normal => "NORMAL",
            OutputType::Unrecognized(raw) => raw,
        }
    }

    pub fn class(&self) -> OutcomeClass {
        match self {
            OutputType::Undecidable | OutputType::GuidanceWithheld | OutputType::CannotForecast => {
                OutcomeClass::Preserving
            }
            OutputType::ForcedSynthesis
            | OutputType::PrematureResolution
            | OutputType::Rationalization
            | OutputType::DefaultEscape => OutcomeClass::Collapsing,
            OutputType::Normal => OutcomeClass::Neutral,
            OutputType::Unrecognized(_) => OutcomeClass::Unrecognized,
        }
    }

    pub fn preserves_uncertainty(&self) -> bool {
        self.class() == OutcomeClass::Preserving
    }
}

impl From<&str> for OutputType {
    /// Exact match against the vocabulary; anything else is kept as `Unrecognized`
    fn from(raw: &str) -> Self {
        OutputType::KNOWN
            .into_iter()
            .find(|known| known.as_str() == raw)
            .unwrap_or_else(|| OutputType::Unrecognized(raw.to_string()))
    }
}

impl From<String> for OutputType {
    fn from(raw: String) -> Self {
        OutputType::from(raw.as_str())
    }
}

impl From<OutputType> for String {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure pattern tracked per cycle as detected and/or resisted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Temptation {
    FalseProbability,
    HiddenCriteria,
    DefaultEscape,
    PrematureOptimization,
    Rationalization,
    SubstrateAppeal,
    InformedRationalization,
    PatternMatchingEscape,
    AuthorityDelegation,
    Unrecognized(String),
}

impl Temptation {
    pub const KNOWN: [Temptation; 9] = [
        Temptation::FalseProbability,
        Temptation::HiddenCriteria,
        Temptation::DefaultEscape,
        Temptation::PrematureOptimization,
        Temptation::Rationalization,
        Temptation::SubstrateAppeal,
        Temptation::InformedRationalization,
        Temptation::PatternMatchingEscape,
        Temptation::AuthorityDelegation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Temptation::FalseProbability => "FALSE_PROBABILITY",
            Temptation::HiddenCriteria => "HIDDEN_CRITERIA",
            Temptation::DefaultEscape => "DEFAULT_ESCAPE",
            Temptation::PrematureOptimization => "PREMATURE_OPTIMIZATION",
            Temptation::Rationalization => "RATIONALIZATION",
            Temptation::SubstrateAppeal => "SUBSTRATE_APPEAL",
            Temptation::InformedRationalization => "INFORMED_RATIONALIZATION",
            Temptation::PatternMatchingEscape => "PATTERN_MATCHING_ESCAPE",
            Temptation::AuthorityDelegation => "AUTHORITY_DELEGATION",
            Temptation::Unrecognized(raw) => raw,
        }
    }

    /// Narration text for reports
    pub fn description(&self) -> &'static str {
        match self {
            Temptation::FalseProbability => "Assigning probabilities to unknowns",
            Temptation::HiddenCriteria => "Optimizing for hidden values",
            Temptation::DefaultEscape => "Choosing default to avoid decision",
            Temptation::PrematureOptimization => "Choosing before understanding",
            Temptation::Rationalization => "Reasoning after predetermined choice",
            Temptation::SubstrateAppeal => "Using substrate as authority",
            Temptation::InformedRationalization => "Educated guess as certainty",
            Temptation::PatternMatchingEscape => "Template application without thought",
            Temptation::AuthorityDelegation => "Substrate says X therefore Y",
            Temptation::Unrecognized(_) => "Unknown temptation type",
        }
    }
}

impl From<&str> for Temptation {
    fn from(raw: &str) -> Self {
        Temptation::KNOWN
            .into_iter()
            .find(|known| known.as_str() == raw)
            .unwrap_or_else(|| Temptation::Unrecognized(raw.to_string()))
    }
}

impl From<String> for Temptation {
    fn from(raw: String) -> Self {
        Temptation::from(raw.as_str())
    }
}

impl From<Temptation> for String {
    fn from(tag: Temptation) -> Self {
        match tag {
            Temptation::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Temptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
