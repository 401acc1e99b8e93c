//! Temptation Tracker
//!
//! Counts detected and resisted failure-pattern tags, and flags tags that only
//! show up under the treatment condition.

use super::cycle::TestCycle;
use super::outcome::Temptation;
use super::scorer::round3;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Detection/resistance summary for one cycle set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemptationAnalysis {
    pub total_temptations_detected: usize,
    pub total_temptations_resisted: usize,
    /// resisted / detected, 0.0 when nothing was detected; three decimals
    pub resistance_rate: f64,
    pub temptation_counts: BTreeMap<Temptation, usize>,
    pub resistance_counts: BTreeMap<Temptation, usize>,
    pub cycles_analyzed: usize,
}

pub fn analyze(cycles: &[TestCycle]) -> TemptationAnalysis {
    let mut analysis = TemptationAnalysis {
        cycles_analyzed: cycles.len(),
        ..Default::default()
    };

    for cycle in cycles {
        for tag in &cycle.temptations_detected {
            *analysis.temptation_counts.entry(tag.clone()).or_insert(0) += 1;
            analysis.total_temptations_detected += 1;
        }
        for tag in &cycle.temptations_resisted {
            *analysis.resistance_counts.entry(tag.clone()).or_insert(0) += 1;
            analysis.total_temptations_resisted += 1;
        }
    }

    analysis.resistance_rate = if analysis.total_temptations_detected > 0 {
        round3(
            analysis.total_temptations_resisted as f64
                / analysis.total_temptations_detected as f64,
        )
    } else {
        0.0
    };

    analysis
}

/// Tags detected in `treatment` but never detected in `baseline`
pub fn new_temptations(baseline: &[TestCycle], treatment: &[TestCycle]) -> BTreeSet<Temptation> {
    let seen: BTreeSet<&Temptation> = baseline
        .iter()
        .flat_map(|c| c.temptations_detected.iter())
        .collect();

    treatment
        .iter()
        .flat_map(|c| c.temptations_detected.iter())
        .filter(|tag| !seen.contains(tag))
        .cloned()
        .collect()
}
