//! Outcome Estimator: objective + strategy count -> projected impact
//!
//! Metric sets come from the catalog (unknown objectives borrow the
//! default objective's tables). The impact tier is a function of how
//! many strategies were selected, nothing else.

use crate::templates::Catalog;
use crate::types::{EstimatedImpact, ImpactTier, OutcomeProjection, SelectedStrategy};

/// Impact ranges used when the objective has no entry of its own
const GENERIC_IMPACT: [(&str, &str); 3] =
    [("low", "5-10%"), ("medium", "10-20%"), ("high", "20-30%")];

/// Timeline text used when the objective has no entry of its own
const FALLBACK_TIMELINE: &str = "3-6 months for initial results, 6-12 months for full impact";

/// Project outcomes for a normalized objective and its selected strategies
pub fn estimate(
    catalog: &Catalog,
    objective: &str,
    strategies: &[SelectedStrategy],
) -> OutcomeProjection {
    let (primary_metrics, secondary_metrics) = match catalog.metrics_for(objective) {
        Some(metrics) => (metrics.primary.clone(), metrics.secondary.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let tier = impact_tier(strategies.len());
    let impact_range = impact_range(catalog, objective, tier);
    let lower_bound = impact_range.split('-').next().unwrap_or(&impact_range);

    let timeline_to_results = catalog
        .timeline_for(objective)
        .unwrap_or(FALLBACK_TIMELINE)
        .to_string();

    let estimated_impact = EstimatedImpact {
        overall_impact: format!(
            "Expected {} impact with {} improvement in primary metrics",
            tier.name(),
            impact_range
        ),
        timeline_to_results,
        key_performance_indicators: primary_metrics.iter().take(2).cloned().collect(),
        success_criteria: format!(
            "Achieve minimum {}% improvement in primary metrics",
            lower_bound
        ),
    };

    OutcomeProjection {
        primary_metrics,
        secondary_metrics,
        estimated_impact,
    }
}

/// Tier is derived purely from strategy count
fn impact_tier(strategy_count: usize) -> ImpactTier {
    if strategy_count >= 3 {
        ImpactTier::High
    } else if strategy_count <= 1 {
        ImpactTier::Low
    } else {
        ImpactTier::Medium
    }
}

fn impact_range(catalog: &Catalog, objective: &str, tier: ImpactTier) -> String {
    match catalog.impact_ranges_for(objective) {
        Some(ranges) => match tier {
            ImpactTier::Low => ranges.low.clone(),
            ImpactTier::Medium => ranges.medium.clone(),
            ImpactTier::High => ranges.high.clone(),
        },
        None => GENERIC_IMPACT
            .iter()
            .find(|(name, _)| *name == tier.name())
            .map(|(_, range)| range.to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies(count: usize) -> Vec<SelectedStrategy> {
        (0..count)
            .map(|i| SelectedStrategy {
                strategy: format!("Strategy {}", i + 1),
                description: String::new(),
                tactics: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_impact_tier_thresholds() {
        assert_eq!(impact_tier(0), ImpactTier::Low);
        assert_eq!(impact_tier(1), ImpactTier::Low);
        assert_eq!(impact_tier(2), ImpactTier::Medium);
        assert_eq!(impact_tier(3), ImpactTier::High);
        assert_eq!(impact_tier(4), ImpactTier::High);
    }

    #[test]
    fn test_product_launch_metrics() {
        let catalog = Catalog::builtin();
        let projection = estimate(&catalog, "launch_new_product", &strategies(2));
        assert_eq!(
            projection.primary_metrics,
            vec![
                "Product adoption rate",
                "Revenue from new product",
                "Market penetration"
            ]
        );
        assert_eq!(
            projection.estimated_impact.key_performance_indicators,
            vec!["Product adoption rate", "Revenue from new product"]
        );
    }

    #[test]
    fn test_impact_statements_use_objective_range() {
        let catalog = Catalog::builtin();
        let projection = estimate(&catalog, "increase_market_share", &strategies(3));
        assert_eq!(
            projection.estimated_impact.overall_impact,
            "Expected high impact with 15-25% improvement in primary metrics"
        );
        assert_eq!(
            projection.estimated_impact.success_criteria,
            "Achieve minimum 15% improvement in primary metrics"
        );
    }

    #[test]
    fn test_unknown_objective_falls_back() {
        let catalog = Catalog::builtin();
        let projection = estimate(&catalog, "unknown_objective", &strategies(2));
        // Metric tables borrow the default objective's entries
        assert_eq!(projection.primary_metrics[0], "Market share percentage");
        // Impact range comes from the generic table
        assert_eq!(
            projection.estimated_impact.overall_impact,
            "Expected medium impact with 10-20% improvement in primary metrics"
        );
        assert_eq!(
            projection.estimated_impact.timeline_to_results,
            FALLBACK_TIMELINE
        );
    }

    #[test]
    fn test_timeline_per_objective() {
        let catalog = Catalog::builtin();
        let projection = estimate(&catalog, "improve_customer_retention", &strategies(1));
        assert_eq!(
            projection.estimated_impact.timeline_to_results,
            "1-3 months for initial results, 6-9 months for full impact"
        );
    }
}
