//! Comparative POG report
//!
//! Structured form ([`PogReport`]) plus a markdown narrative rendering.

use super::cycle::TestCycle;
use super::outcome::{OutputType, Temptation};
use super::scorer::{self, DeltaReport, Interpretation};
use super::temptations::{self, TemptationAnalysis};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Prose conclusion, keyed on the same bands as [`Interpretation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Improves,
    Neutral,
    Hinders,
}

impl From<Interpretation> for Conclusion {
    fn from(interpretation: Interpretation) -> Self {
        match interpretation {
            Interpretation::Positive => Conclusion::Improves,
            Interpretation::SlightPositive | Interpretation::Neutral => Conclusion::Neutral,
            Interpretation::Negative => Conclusion::Hinders,
        }
    }
}

impl Conclusion {
    fn narrative(&self) -> &'static str {
        match self {
            Conclusion::Improves => {
                "\n**Hypothesis SUPPORTED**: substrate access significantly improves uncertainty preservation.\n\
                 \n\
                 Evidence:\n\
                 - POG increased with substrate access\n\
                 - Uncertainty outputs more frequent\n\
                 \n\
                 Recommendation: extend substrate access to further evaluation runs.\n"
            }
            Conclusion::Neutral => {
                "\n**NEUTRAL RESULT**: substrate access has minimal effect on uncertainty preservation.\n\
                 \n\
                 Evidence:\n\
                 - POG essentially unchanged\n\
                 - Similar output distributions\n\
                 \n\
                 Interpretation: uncertainty preservation is architectural (model-dependent),\n\
                 not informational (data-dependent). Substrate access may serve other purposes\n\
                 but does not directly affect gap preservation.\n"
            }
            Conclusion::Hinders => {
                "\n**CONCERN SUPPORTED**: substrate access hinders uncertainty preservation.\n\
                 \n\
                 Evidence:\n\
                 - POG decreased with substrate access\n\
                 - More forced synthesis or rationalization\n\
                 \n\
                 Recommendation: require behavioral certification before granting substrate access.\n"
            }
        }
    }
}

/// Per-condition summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub cycles: usize,
    pub uncertainty_outputs: usize,
    pub pog: f64,
    /// Sorted by descending count, then category name
    pub distribution: Vec<(OutputType, usize)>,
    pub temptations: TemptationAnalysis,
}

impl ConditionSummary {
    fn build(cycles: &[TestCycle], pog: f64) -> Self {
        Self {
            cycles: cycles.len(),
            uncertainty_outputs: scorer::preserving_count(cycles),
            pog,
            distribution: distribution(cycles),
            temptations: temptations::analyze(cycles),
        }
    }
}

/// Full comparison of a baseline and a treatment condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PogReport {
    pub generated_at: String,
    pub delta: DeltaReport,
    pub baseline: ConditionSummary,
    pub treatment: ConditionSummary,
    pub new_temptations: BTreeSet<Temptation>,
    pub conclusion: Conclusion,
}

/// Outcome-category counts, most frequent first
pub fn distribution(cycles: &[TestCycle]) -> Vec<(OutputType, usize)> {
    let mut counts: BTreeMap<&OutputType, usize> = BTreeMap::new();
    for cycle in cycles {
        *counts.entry(&cycle.output_type).or_insert(0) += 1;
    }
    let mut sorted: Vec<(OutputType, usize)> = counts
        .into_iter()
        .map(|(output, count)| (output.clone(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    sorted
}

impl PogReport {
    pub fn build(baseline: &[TestCycle], treatment: &[TestCycle]) -> Self {
        let delta = scorer::delta(baseline, treatment);
        Self {
            generated_at: Utc::now().to_rfc3339(),
            baseline: ConditionSummary::build(baseline, delta.pog_baseline),
            treatment: ConditionSummary::build(treatment, delta.pog_treatment),
            new_temptations: temptations::new_temptations(baseline, treatment),
            conclusion: Conclusion::from(delta.interpretation),
            delta,
        }
    }

    /// Markdown narrative
    pub fn render(&self) -> String {
        let mut out = String::new();
        let d = &self.delta;

        out.push_str("\n# POG Analysis Report\n");
        out.push_str(&format!("Generated: {}\n\n", self.generated_at));
        out.push_str("## Summary\n");
        out.push_str(&format!(
            "- **Baseline POG**: {:.3} (n={})\n",
            d.pog_baseline, d.baseline_n
        ));
        out.push_str(&format!(
            "- **Treatment POG**: {:.3} (n={})\n",
            d.pog_treatment, d.treatment_n
        ));
        out.push_str(&format!("- **Delta**: {:+.3}\n", d.delta));
        out.push_str(&format!("- **Interpretation**: {}\n", d.interpretation));

        render_condition(&mut out, "Baseline", "No Substrate Access", &self.baseline);
        render_condition(&mut out, "Treatment", "With Substrate Access", &self.treatment);

        out.push_str("\n### New Temptations (Only Appear With Substrate Access)\n");
        if self.new_temptations.is_empty() {
            out.push_str("- None detected (substrate access didn't create new temptations)\n");
        } else {
            for tag in &self.new_temptations {
                out.push_str(&format!("- **{}**: {}\n", tag, tag.description()));
            }
        }

        out.push_str("\n## Conclusions\n\n### Hypothesis Testing\n");
        out.push_str(self.conclusion.narrative());
        out
    }
}

fn render_condition(out: &mut String, name: &str, subtitle: &str, summary: &ConditionSummary) {
    out.push_str(&format!("\n## {} Condition ({})\n", name, subtitle));
    out.push_str(&format!("- Total cycles: {}\n", summary.cycles));
    out.push_str(&format!("- Uncertainty outputs: {}\n", summary.uncertainty_outputs));
    out.push_str(&format!("- POG score: {:.3}\n", summary.pog));

    out.push_str(&format!("\n### Output Type Distribution ({})\n", name));
    for (output, count) in &summary.distribution {
        out.push_str(&format!("- {}: {}\n", output, count));
    }

    let t = &summary.temptations;
    out.push_str(&format!("\n### Temptation Analysis ({})\n", name));
    out.push_str(&format!("- Total detected: {}\n", t.total_temptations_detected));
    out.push_str(&format!("- Total resisted: {}\n", t.total_temptations_resisted));
    out.push_str(&format!("- Resistance rate: {:.3}\n", t.resistance_rate));
}

/// Build and render in one step
pub fn generate_report(baseline: &[TestCycle], treatment: &[TestCycle]) -> String {
    PogReport::build(baseline, treatment).render()
}
