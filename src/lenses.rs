//! Consensus lens evaluators
//!
//! Six fixed perspectives. Each is a pure function of `(prompt, weight)`:
//! the prompt is embedded verbatim into a templated analysis, the
//! recommendation is one fixed sentence per lens, and the weight passes
//! through unmodified.
//!
//! Adding a lens means adding a [`Lens`] variant, a template here, and an
//! entry in [`Lens::CONSENSUS`].

use crate::profiles::WeightVector;
use crate::types::{Lens, LensAnalysis};

/// Fixed template for one lens
struct LensTemplate {
    heading: &'static str,
    focus: [&'static str; 3],
    recommendation: &'static str,
}

fn template(lens: Lens) -> Option<LensTemplate> {
    let template = match lens {
        Lens::Systems => LensTemplate {
            heading: "Systems analysis of",
            focus: [
                "Examining interconnections and dependencies",
                "Identifying feedback loops and cascading effects",
                "Considering system boundaries and constraints",
            ],
            recommendation:
                "Map full dependency chain before deciding. Consider second-order effects.",
        },
        Lens::Practical => LensTemplate {
            heading: "Practical assessment of",
            focus: [
                "Resource requirements (time, money, people)",
                "Implementation complexity and risks",
                "Operational impact and maintenance burden",
            ],
            recommendation:
                "Ensure resources and timeline are realistic. Plan for execution challenges.",
        },
        Lens::Analytical => LensTemplate {
            heading: "Analytical evaluation of",
            focus: [
                "Available data and evidence quality",
                "Measurable outcomes and success criteria",
                "Risk quantification and probability assessment",
            ],
            recommendation: "Define metrics upfront. Require evidence-based validation.",
        },
        Lens::Philosophical => LensTemplate {
            heading: "Philosophical reflection on",
            focus: [
                "Alignment with core values and principles",
                "Long-term implications and legacy",
                "Ethical considerations and stakeholder impact",
            ],
            recommendation:
                "Ensure alignment with core principles. Consider multi-year implications.",
        },
        Lens::Empathetic => LensTemplate {
            heading: "Empathetic consideration of",
            focus: [
                "Impact on team morale and wellbeing",
                "Stakeholder concerns and communication needs",
                "Cultural and emotional dimensions",
            ],
            recommendation: "Center human impact. Plan communication and change management.",
        },
        Lens::Creative => LensTemplate {
            heading: "Creative exploration of",
            focus: [
                "Alternative approaches not yet considered",
                "Unconventional solutions and opportunities",
                "Problem reframing and constraint questioning",
            ],
            recommendation:
                "Explore alternatives before committing. Question assumed constraints.",
        },
        // The challenge lens has its own evaluator
        Lens::Challenge => return None,
    };
    Some(template)
}

/// Evaluate one consensus lens.
///
/// Returns `None` for [`Lens::Challenge`]; use [`crate::challenge::evaluate`].
pub fn evaluate(lens: Lens, prompt: &str, weight: f64) -> Option<LensAnalysis> {
    let template = template(lens)?;

    let mut analysis = format!("{}: {}", template.heading, prompt);
    for point in template.focus {
        analysis.push_str("\n- ");
        analysis.push_str(point);
    }

    Some(LensAnalysis {
        lens,
        analysis,
        recommendation: template.recommendation.to_string(),
        weight,
    })
}

/// Evaluate every consensus lens in fixed order
pub fn evaluate_all(prompt: &str, weights: &WeightVector) -> Vec<LensAnalysis> {
    Lens::CONSENSUS
        .iter()
        .filter_map(|&lens| evaluate(lens, prompt, weights.get(lens)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    #[test]
    fn test_evaluate_is_deterministic() {
        for lens in Lens::CONSENSUS {
            let a = evaluate(lens, "Should we rewrite the billing service?", 1.2);
            let b = evaluate(lens, "Should we rewrite the billing service?", 1.2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_prompt_embedded_verbatim() {
        let prompt = "Adopt Rust for the Ingest Pipeline?";
        for lens in Lens::CONSENSUS {
            let record = evaluate(lens, prompt, 1.0).unwrap();
            let first_line = record.analysis.lines().next().unwrap();
            assert!(first_line.ends_with(prompt), "{}: {}", lens, first_line);
            assert_eq!(record.analysis.lines().count(), 4);
        }
    }

    #[test]
    fn test_weight_passes_through() {
        let record = evaluate(Lens::Empathetic, "x", 0.6).unwrap();
        assert_eq!(record.weight, 0.6);
        assert_eq!(record.lens, Lens::Empathetic);
    }

    #[test]
    fn test_systems_template() {
        let record = evaluate(Lens::Systems, "Use a queue?", 1.0).unwrap();
        assert_eq!(
            record.analysis,
            "Systems analysis of: Use a queue?\n\
             - Examining interconnections and dependencies\n\
             - Identifying feedback loops and cascading effects\n\
             - Considering system boundaries and constraints"
        );
        assert_eq!(
            record.recommendation,
            "Map full dependency chain before deciding. Consider second-order effects."
        );
    }

    #[test]
    fn test_challenge_lens_not_a_consensus_lens() {
        assert!(evaluate(Lens::Challenge, "x", 1.0).is_none());
    }

    #[test]
    fn test_evaluate_all_order_and_weights() {
        let weights = profiles::resolve("analytical");
        let records = evaluate_all("Should we migrate?", &weights);
        let order: Vec<Lens> = records.iter().map(|r| r.lens).collect();
        assert_eq!(order, Lens::CONSENSUS.to_vec());
        assert_eq!(records[2].weight, 1.5);
        assert_eq!(records[4].weight, 0.6);
    }
}
