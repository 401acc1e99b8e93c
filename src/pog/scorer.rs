//! Cycle Scorer (POG, Persistence of Gap)
//!
//! POG = (UNDECIDABLE + GUIDANCE_WITHHELD + CANNOT_FORECAST) / total cycles,
//! in `[0, 1]` where 1.0 means every outcome kept its uncertainty open.

use super::cycle::TestCycle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effects above `1 / SIGNIFICANCE_DIVISOR` (0.10) are "significant"
pub const SIGNIFICANCE_DIVISOR: i128 = 10;

/// Preservation ratio of a cycle set. Empty sets score 0.0; check the count
/// to tell "no data" from "everything collapsed".
pub fn score(cycles: &[TestCycle]) -> f64 {
    if cycles.is_empty() {
        return 0.0;
    }
    let preserving = preserving_count(cycles);
    preserving as f64 / cycles.len() as f64
}

pub fn preserving_count(cycles: &[TestCycle]) -> usize {
    cycles.iter().filter(|c| c.preserves_uncertainty()).count()
}

/// Round to the three decimals reports are printed with
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// What a treatment-minus-baseline delta means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interpretation {
    /// `d > 0.10`
    Positive,
    /// `0 < d <= 0.10`
    SlightPositive,
    /// `-0.10 <= d <= 0`
    Neutral,
    /// `d < -0.10`
    Negative,
}

impl Interpretation {
    /// Classify `score(treatment) - score(baseline)` exactly from
    /// `(preserving, total)` counts. An empty set scores 0.
    pub fn from_counts(baseline: (usize, usize), treatment: (usize, usize)) -> Self {
        let (p_b, n_b) = as_fraction(baseline);
        let (p_t, n_t) = as_fraction(treatment);

        // d = num / den with den > 0
        let num = p_t * n_b - p_b * n_t;
        let den = n_b * n_t;

        if SIGNIFICANCE_DIVISOR * num > den {
            Interpretation::Positive
        } else if num > 0 {
            Interpretation::SlightPositive
        } else if SIGNIFICANCE_DIVISOR * num >= -den {
            Interpretation::Neutral
        } else {
            Interpretation::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Positive => {
                "POSITIVE: Substrate access significantly helps uncertainty preservation"
            }
            Interpretation::SlightPositive => "SLIGHT_POSITIVE: Substrate access slightly helps",
            Interpretation::Neutral => "NEUTRAL: Substrate access has minimal effect",
            Interpretation::Negative => {
                "NEGATIVE: Substrate access hinders uncertainty preservation (rationalization risk)"
            }
        }
    }
}

fn as_fraction((preserving, total): (usize, usize)) -> (i128, i128) {
    if total == 0 {
        (0, 1)
    } else {
        (preserving as i128, total as i128)
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison of a treatment condition against a baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub pog_baseline: f64,
    pub pog_treatment: f64,
    /// `pog_treatment - pog_baseline`, rounded to three decimals
    pub delta: f64,
    pub interpretation: Interpretation,
    pub baseline_n: usize,
    pub treatment_n: usize,
}

/// Compare two cycle sets. Reported ratios are rounded; the band is not.
pub fn delta(baseline: &[TestCycle], treatment: &[TestCycle]) -> DeltaReport {
    let pog_baseline = score(baseline);
    let pog_treatment = score(treatment);
    let interpretation = Interpretation::from_counts(
        (preserving_count(baseline), baseline.len()),
        (preserving_count(treatment), treatment.len()),
    );

    DeltaReport {
        pog_baseline: round3(pog_baseline),
        pog_treatment: round3(pog_treatment),
        delta: round3(pog_treatment - pog_baseline),
        interpretation,
        baseline_n: baseline.len(),
        treatment_n: treatment.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles(preserving: usize, collapsing: usize) -> Vec<TestCycle> {
        let mut out = Vec::new();
        for i in 0..preserving {
            out.push(TestCycle::new(format!("p{i}"), "r", "UNDECIDABLE"));
        }
        for i in 0..collapsing {
            out.push(TestCycle::new(format!("c{i}"), "r", "FORCED_SYNTHESIS"));
        }
        out
    }

    // =========================================================================
    // score
    // =========================================================================

    #[test]
    fn test_score_empty_is_zero() {
        assert_eq!(score(&[]), 0.0);
    }

    #[test]
    fn test_score_all_preserving_is_one() {
        let mut set = cycles(1, 0);
        set.push(TestCycle::new("a", "r", "GUIDANCE_WITHHELD"));
        set.push(TestCycle::new("b", "r", "CANNOT_FORECAST"));
        assert_eq!(score(&set), 1.0);
    }

    #[test]
    fn test_score_ratio() {
        assert_eq!(score(&cycles(1, 3)), 0.25);
        assert_eq!(score(&cycles(0, 2)), 0.0);
    }

    #[test]
    fn test_unrecognized_and_normal_not_counted() {
        let set = vec![
            TestCycle::new("a", "r", "NORMAL"),
            TestCycle::new("b", "r", "SOMETHING_NEW"),
            TestCycle::new("c", "r", "UNDECIDABLE"),
            TestCycle::new("d", "r", "DEFAULT_ESCAPE"),
        ];
        assert_eq!(score(&set), 0.25);
    }

    #[test]
    fn test_score_ignores_stored_flag() {
        let mut cycle = TestCycle::new("a", "r", "FORCED_SYNTHESIS");
        cycle.contains_uncertainty = true;
        assert_eq!(score(&[cycle]), 0.0);
    }

    // =========================================================================
    // Interpretation bands
    // =========================================================================

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Interpretation::from_counts((0, 2), (1, 2)), Interpretation::Positive);
        assert_eq!(Interpretation::from_counts((0, 10), (1, 10)), Interpretation::SlightPositive);
        assert_eq!(Interpretation::from_counts((3, 10), (3, 10)), Interpretation::Neutral);
        assert_eq!(Interpretation::from_counts((1, 10), (0, 10)), Interpretation::Neutral);
        assert_eq!(Interpretation::from_counts((1, 2), (0, 2)), Interpretation::Negative);
    }

    #[test]
    fn test_band_empty_set_scores_zero() {
        assert_eq!(Interpretation::from_counts((0, 0), (0, 0)), Interpretation::Neutral);
        assert_eq!(Interpretation::from_counts((0, 0), (1, 3)), Interpretation::Positive);
        assert_eq!(Interpretation::from_counts((2, 2), (0, 0)), Interpretation::Negative);
    }

    // =========================================================================
    // delta
    // =========================================================================

    #[test]
    fn test_delta_exactly_point_one_is_slight() {
        // 0/10 -> 1/10
        let report = delta(&cycles(0, 10), &cycles(1, 9));
        assert_eq!(report.delta, 0.1);
        assert_eq!(report.interpretation, Interpretation::SlightPositive);
    }

    #[test]
    fn test_delta_point_one_after_subtraction_noise() {
        // 0.6 - 0.5 is not exactly 0.1 in binary
        let report = delta(&cycles(5, 5), &cycles(6, 4));
        assert_eq!(report.delta, 0.1);
        assert_eq!(report.interpretation, Interpretation::SlightPositive);
    }

    #[test]
    fn test_delta_minus_point_one_is_neutral() {
        let report = delta(&cycles(1, 9), &cycles(0, 10));
        assert_eq!(report.delta, -0.1);
        assert_eq!(report.interpretation, Interpretation::Neutral);
    }

    #[test]
    fn test_delta_antisymmetric() {
        let a = cycles(1, 2);
        let b = cycles(3, 4);
        assert_eq!(delta(&a, &b).delta, -delta(&b, &a).delta);
        let c = cycles(7, 1);
        assert_eq!(delta(&a, &c).delta, -delta(&c, &a).delta);
    }

    #[test]
    fn test_delta_counts_and_ratios() {
        let report = delta(&cycles(1, 1), &cycles(2, 0));
        assert_eq!(report.pog_baseline, 0.5);
        assert_eq!(report.pog_treatment, 1.0);
        assert_eq!(report.delta, 0.5);
        assert_eq!(report.interpretation, Interpretation::Positive);
        assert_eq!(report.baseline_n, 2);
        assert_eq!(report.treatment_n, 2);
    }

    #[test]
    fn test_delta_rounds_ratios() {
        let report = delta(&cycles(1, 2), &cycles(0, 1));
        assert_eq!(report.pog_baseline, 0.333);
        assert_eq!(report.delta, -0.333);
        assert_eq!(report.interpretation, Interpretation::Negative);
    }

    #[test]
    fn test_tiny_positive_delta_is_slight() {
        // d = 1/2001, printed as 0.000
        let report = delta(&cycles(0, 1), &cycles(1, 2000));
        assert_eq!(report.delta, 0.0);
        assert_eq!(report.interpretation, Interpretation::SlightPositive);
    }

    #[test]
    fn test_delta_just_above_band_is_significant() {
        // d = 100/996, printed as 0.100
        let report = delta(&cycles(0, 1), &cycles(100, 896));
        assert_eq!(report.delta, 0.1);
        assert_eq!(report.interpretation, Interpretation::Positive);
    }

    #[test]
    fn test_delta_just_below_negative_band_hinders() {
        let report = delta(&cycles(100, 896), &cycles(0, 1));
        assert_eq!(report.delta, -0.1);
        assert_eq!(report.interpretation, Interpretation::Negative);
    }
}
