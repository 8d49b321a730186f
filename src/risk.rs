//! Risk Assessor: bounded risk list with one mitigation per risk
//!
//! Risks accumulate in selection order from the catalog's per-strategy
//! associations, then from caller-supplied challenges, de-duplicated and
//! cut at five. Insertion order is the only ordering - there is no
//! severity ranking.

use crate::templates::Catalog;
use crate::types::{RiskAssessment, SelectedStrategy};
use std::collections::BTreeMap;

const MAX_RISKS: usize = 5;

/// Assess risks for the selected strategies and known challenges
pub fn assess(
    catalog: &Catalog,
    strategies: &[SelectedStrategy],
    current_challenges: &[String],
) -> RiskAssessment {
    let mut key_risks: Vec<String> = Vec::new();

    for strategy in strategies {
        for risk in catalog.risks_for(&strategy.strategy) {
            if !key_risks.contains(risk) {
                key_risks.push(risk.clone());
            }
        }
    }

    for challenge in current_challenges {
        let risk = format!("Existing challenge: {}", challenge);
        if !key_risks.contains(&risk) {
            key_risks.push(risk);
        }
    }

    key_risks.truncate(MAX_RISKS);

    let mitigation_strategies: BTreeMap<String, String> = key_risks
        .iter()
        .map(|risk| (risk.clone(), mitigation_for(risk).to_string()))
        .collect();

    RiskAssessment {
        key_risks,
        mitigation_strategies,
    }
}

/// Pick the mitigation template for a risk. Keyword pairs are tested in
/// fixed priority order against the lowercased risk text; first match wins.
fn mitigation_for(risk: &str) -> &'static str {
    let risk = risk.to_lowercase();
    if risk.contains("pricing") || risk.contains("margin") {
        "Implement value-based pricing strategy with tiered options to protect margins"
    } else if risk.contains("competitive") || risk.contains("retaliation") {
        "Develop scenario planning for competitive responses; prepare contingency plans"
    } else if risk.contains("delay") || risk.contains("timeline") {
        "Implement agile methodology with regular milestones and flexible resource allocation"
    } else if risk.contains("cost") || risk.contains("budget") {
        "Establish clear budget thresholds with stage-gate approach; prioritize initiatives by ROI"
    } else if risk.contains("adoption") || risk.contains("engagement") {
        "Develop staged rollout with feedback loops; create targeted incentives for early adoption"
    } else if risk.contains("measurement") || risk.contains("roi") {
        "Implement comprehensive attribution model; establish proxy metrics for long-term initiatives"
    } else if risk.contains("resource") {
        "Create flexible resourcing plan with external partner options; prioritize initiatives"
    } else {
        "Establish monitoring system with early warning indicators; create contingency plans"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> SelectedStrategy {
        SelectedStrategy {
            strategy: name.to_string(),
            description: String::new(),
            tactics: Vec::new(),
        }
    }

    #[test]
    fn test_risks_capped_at_five_with_one_mitigation_each() {
        let catalog = Catalog::builtin();
        let strategies = vec![
            named("Competitive Pricing Strategy"),
            named("Product Differentiation"),
            named("Market Expansion"),
        ];
        let challenges = vec!["high churn".to_string(), "small team".to_string()];
        let assessment = assess(&catalog, &strategies, &challenges);

        assert_eq!(assessment.key_risks.len(), 5);
        for risk in &assessment.key_risks {
            assert!(
                assessment.mitigation_strategies.contains_key(risk),
                "missing mitigation for {risk}"
            );
        }
        assert_eq!(
            assessment.mitigation_strategies.len(),
            assessment.key_risks.len()
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::builtin();
        let assessment = assess(&catalog, &[named("Competitive Pricing Strategy")], &[]);
        assert_eq!(
            assessment.key_risks,
            vec![
                "Potential margin erosion",
                "Competitive retaliation",
                "Price war escalation"
            ]
        );
    }

    #[test]
    fn test_challenges_formatted_and_deduplicated() {
        let catalog = Catalog::builtin();
        let challenges = vec!["budget cuts".to_string(), "budget cuts".to_string()];
        let assessment = assess(&catalog, &[], &challenges);
        assert_eq!(
            assessment.key_risks,
            vec!["Existing challenge: budget cuts"]
        );
    }

    #[test]
    fn test_unknown_strategy_contributes_no_risks() {
        let catalog = Catalog::builtin();
        let assessment = assess(&catalog, &[named("Value-Added Services")], &[]);
        assert!(assessment.key_risks.is_empty());
        assert!(assessment.mitigation_strategies.is_empty());
    }

    #[test]
    fn test_mitigation_keyword_priority() {
        // "pricing" outranks "competitive" even when both appear
        assert!(mitigation_for("Competitive pricing pressure").starts_with("Implement value-based"));
        assert!(mitigation_for("Competitive retaliation").starts_with("Develop scenario planning"));
        assert!(mitigation_for("Feature development delays").contains("agile methodology"));
        assert!(mitigation_for("High development costs").contains("budget thresholds"));
        assert!(mitigation_for("Low adoption rates").contains("staged rollout"));
        assert!(mitigation_for("Difficulty measuring direct ROI").contains("attribution model"));
        assert!(mitigation_for("Resource dispersion").contains("flexible resourcing plan"));
    }

    #[test]
    fn test_generic_mitigation_when_nothing_matches() {
        assert!(mitigation_for("Regulatory compliance issues")
            .starts_with("Establish monitoring system"));
    }

    #[test]
    fn test_mitigation_is_case_insensitive() {
        assert_eq!(
            mitigation_for("MARGIN EROSION"),
            mitigation_for("margin erosion")
        );
    }
}
