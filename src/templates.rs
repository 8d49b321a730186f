//! Strategy Catalog: the static knowledge base behind every recommendation
//!
//! Maps each supported business objective to a set of strategy templates,
//! plus the companion lookup tables (metrics, impact ranges, timelines,
//! per-strategy risks). The catalog is built once at startup and passed
//! by reference into the engine - immutable, injectable, substitutable
//! in tests. No module-level mutable state.

use crate::types::{SelectedStrategy, StrategyTemplate};
use std::collections::HashMap;

/// Objective used when the caller's objective is not in the catalog
pub const DEFAULT_OBJECTIVE: &str = "increase_market_share";

/// Segment keywords we can classify. A segment containing none of these
/// is treated as a wildcard during selection.
pub const KNOWN_SEGMENT_KEYWORDS: [&str; 4] = ["b2b", "b2c", "retail", "tech"];

/// Primary/secondary metric names tracked for one objective
#[derive(Debug, Clone)]
pub struct ObjectiveMetrics {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

/// Percentage-range strings per impact tier for one objective
#[derive(Debug, Clone)]
pub struct ImpactRanges {
    pub low: String,
    pub medium: String,
    pub high: String,
}

/// The full read-only knowledge base
#[derive(Debug, Clone)]
pub struct Catalog {
    pub strategies: HashMap<String, Vec<StrategyTemplate>>,
    pub metrics: HashMap<String, ObjectiveMetrics>,
    pub impact_ranges: HashMap<String, ImpactRanges>,
    pub timelines: HashMap<String, String>,
    pub strategy_risks: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Templates for an objective, falling back to the default objective
    /// for anything unknown. Empty only if the catalog itself is empty.
    pub fn strategies_for(&self, objective: &str) -> &[StrategyTemplate] {
        self.strategies
            .get(objective)
            .or_else(|| self.strategies.get(DEFAULT_OBJECTIVE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Metric tables for an objective, with the same default fallback
    pub fn metrics_for(&self, objective: &str) -> Option<&ObjectiveMetrics> {
        self.metrics
            .get(objective)
            .or_else(|| self.metrics.get(DEFAULT_OBJECTIVE))
    }

    /// Impact ranges for an objective; None means use the generic table
    pub fn impact_ranges_for(&self, objective: &str) -> Option<&ImpactRanges> {
        self.impact_ranges.get(objective)
    }

    /// Timeline-to-results text; None means use the fallback string
    pub fn timeline_for(&self, objective: &str) -> Option<&str> {
        self.timelines.get(objective).map(String::as_str)
    }

    /// Known risks for a strategy name. Strategies absent from the table
    /// contribute no default risks.
    pub fn risks_for(&self, strategy_name: &str) -> &[String] {
        self.strategy_risks
            .get(strategy_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Select strategies for a normalized (objective, segment, horizon) triple.
///
/// A template is eligible when the horizon is in its horizon tags, and
/// matched when any of its segment tags is a substring of the segment.
/// Segments containing none of the known keywords are treated as wildcard.
/// If nothing survives, the first two templates of the objective's list
/// are returned regardless of horizon fit, so the result is never empty
/// for a non-empty catalog.
pub fn select_strategies(
    catalog: &Catalog,
    objective: &str,
    segment: &str,
    horizon: &str,
) -> Vec<SelectedStrategy> {
    let all = catalog.strategies_for(objective);
    let segment_is_known = KNOWN_SEGMENT_KEYWORDS.iter().any(|kw| segment.contains(kw));

    let mut selected: Vec<SelectedStrategy> = Vec::new();
    for template in all {
        if !template.time_horizon.iter().any(|h| h == horizon) {
            continue;
        }
        let segment_match = template
            .suitable_for
            .iter()
            .any(|tag| segment.contains(tag.as_str()));
        if segment_match || !segment_is_known {
            selected.push(template.to_selected());
        }
    }

    if selected.is_empty() {
        selected = all.iter().take(2).map(StrategyTemplate::to_selected).collect();
    }

    selected
}

impl Catalog {
    /// The built-in knowledge base: 4 objectives, 4 templates each
    pub fn builtin() -> Self {
        let mut strategies = HashMap::new();
        strategies.insert(
            "increase_market_share".to_string(),
            market_share_templates(),
        );
        strategies.insert(
            "improve_customer_retention".to_string(),
            retention_templates(),
        );
        strategies.insert("launch_new_product".to_string(), product_launch_templates());
        strategies.insert(
            "increase_brand_awareness".to_string(),
            brand_awareness_templates(),
        );

        let mut metrics = HashMap::new();
        metrics.insert(
            "increase_market_share".to_string(),
            ObjectiveMetrics {
                primary: vec![
                    "Market share percentage".to_string(),
                    "New customer acquisition".to_string(),
                    "Competitive win rate".to_string(),
                ],
                secondary: vec![
                    "Share of voice".to_string(),
                    "Brand consideration".to_string(),
                    "Product adoption rate".to_string(),
                ],
            },
        );
        metrics.insert(
            "improve_customer_retention".to_string(),
            ObjectiveMetrics {
                primary: vec![
                    "Customer retention rate".to_string(),
                    "Churn rate".to_string(),
                    "Customer lifetime value".to_string(),
                ],
                secondary: vec![
                    "Net promoter score".to_string(),
                    "Repeat purchase rate".to_string(),
                    "Account expansion rate".to_string(),
                ],
            },
        );
        metrics.insert(
            "launch_new_product".to_string(),
            ObjectiveMetrics {
                primary: vec![
                    "Product adoption rate".to_string(),
                    "Revenue from new product".to_string(),
                    "Market penetration".to_string(),
                ],
                secondary: vec![
                    "Product awareness".to_string(),
                    "Feature usage".to_string(),
                    "Cross-sell rate".to_string(),
                ],
            },
        );
        metrics.insert(
            "increase_brand_awareness".to_string(),
            ObjectiveMetrics {
                primary: vec![
                    "Brand awareness".to_string(),
                    "Share of voice".to_string(),
                    "Brand search volume".to_string(),
                ],
                secondary: vec![
                    "Social media engagement".to_string(),
                    "Press mentions".to_string(),
                    "Website traffic".to_string(),
                ],
            },
        );

        let mut impact_ranges = HashMap::new();
        impact_ranges.insert(
            "increase_market_share".to_string(),
            ImpactRanges {
                low: "5-8%".to_string(),
                medium: "8-15%".to_string(),
                high: "15-25%".to_string(),
            },
        );
        impact_ranges.insert(
            "improve_customer_retention".to_string(),
            ImpactRanges {
                low: "10-15%".to_string(),
                medium: "15-25%".to_string(),
                high: "25-40%".to_string(),
            },
        );
        impact_ranges.insert(
            "launch_new_product".to_string(),
            ImpactRanges {
                low: "2-5%".to_string(),
                medium: "5-10%".to_string(),
                high: "10-20%".to_string(),
            },
        );
        impact_ranges.insert(
            "increase_brand_awareness".to_string(),
            ImpactRanges {
                low: "20-30%".to_string(),
                medium: "30-50%".to_string(),
                high: "50-100%".to_string(),
            },
        );

        let mut timelines = HashMap::new();
        timelines.insert(
            "increase_market_share".to_string(),
            "3-6 months for initial results, 6-12 months for full impact".to_string(),
        );
        timelines.insert(
            "improve_customer_retention".to_string(),
            "1-3 months for initial results, 6-9 months for full impact".to_string(),
        );
        timelines.insert(
            "launch_new_product".to_string(),
            "1-2 months for initial traction, 3-6 months for significant adoption".to_string(),
        );
        timelines.insert(
            "increase_brand_awareness".to_string(),
            "2-3 months for initial lift, 6-12 months for significant awareness increase"
                .to_string(),
        );

        let mut strategy_risks = HashMap::new();
        strategy_risks.insert(
            "Competitive Pricing Strategy".to_string(),
            vec![
                "Potential margin erosion".to_string(),
                "Competitive retaliation".to_string(),
                "Price war escalation".to_string(),
            ],
        );
        strategy_risks.insert(
            "Product Differentiation".to_string(),
            vec![
                "Feature development delays".to_string(),
                "Insufficient differentiation".to_string(),
                "High development costs".to_string(),
            ],
        );
        strategy_risks.insert(
            "Market Expansion".to_string(),
            vec![
                "Cultural/regional adaptation challenges".to_string(),
                "Regulatory compliance issues".to_string(),
                "Resource dispersion".to_string(),
            ],
        );
        strategy_risks.insert(
            "Digital Channel Optimization".to_string(),
            vec![
                "Rising acquisition costs".to_string(),
                "Algorithm changes affecting performance".to_string(),
                "Technical implementation challenges".to_string(),
            ],
        );
        strategy_risks.insert(
            "Customer Loyalty Program".to_string(),
            vec![
                "Low adoption rates".to_string(),
                "Reward cost management".to_string(),
                "Program complexity".to_string(),
            ],
        );
        strategy_risks.insert(
            "Market Penetration Strategy".to_string(),
            vec![
                "Higher than expected acquisition costs".to_string(),
                "Slower than projected adoption".to_string(),
                "Supply chain constraints".to_string(),
            ],
        );
        strategy_risks.insert(
            "Content Marketing Strategy".to_string(),
            vec![
                "Content production resource constraints".to_string(),
                "Difficulty measuring direct ROI".to_string(),
                "Audience building timeline".to_string(),
            ],
        );

        Self {
            strategies,
            metrics,
            impact_ranges,
            timelines,
            strategy_risks,
        }
    }
}

// ============================================================================
// TEMPLATE DEFINITIONS
// ============================================================================

fn market_share_templates() -> Vec<StrategyTemplate> {
    vec![
        StrategyTemplate {
            strategy: "Competitive Pricing Strategy".to_string(),
            description: "Implement competitive pricing to attract customers from competitors."
                .to_string(),
            tactics: vec![
                "Conduct comprehensive pricing analysis".to_string(),
                "Identify price elasticity in target segments".to_string(),
                "Develop tiered pricing options".to_string(),
                "Implement strategic discounting for new customers".to_string(),
            ],
            suitable_for: vec![
                "price_sensitive".to_string(),
                "b2c".to_string(),
                "retail".to_string(),
                "e_commerce".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Product Differentiation".to_string(),
            description: "Enhance product features to stand out from competitors.".to_string(),
            tactics: vec![
                "Conduct feature gap analysis against competitors".to_string(),
                "Prioritize development of unique selling points".to_string(),
                "Enhance product positioning".to_string(),
                "Develop compelling messaging around differentiators".to_string(),
            ],
            suitable_for: vec![
                "premium".to_string(),
                "b2b".to_string(),
                "tech".to_string(),
                "saas".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Market Expansion".to_string(),
            description: "Enter new geographic or demographic markets.".to_string(),
            tactics: vec![
                "Identify high-potential market segments".to_string(),
                "Develop market entry strategy".to_string(),
                "Adapt product/messaging for new markets".to_string(),
                "Build channel partnerships in new regions".to_string(),
            ],
            suitable_for: vec![
                "established".to_string(),
                "b2b".to_string(),
                "b2c".to_string(),
                "global".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Digital Channel Optimization".to_string(),
            description: "Enhance digital marketing to increase reach and acquisition."
                .to_string(),
            tactics: vec![
                "Audit current digital channel performance".to_string(),
                "Reallocate budget to high-performing channels".to_string(),
                "Implement advanced targeting capabilities".to_string(),
                "Develop content strategy for organic growth".to_string(),
            ],
            suitable_for: vec![
                "digital_native".to_string(),
                "e_commerce".to_string(),
                "b2c".to_string(),
                "d2c".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
    ]
}

fn retention_templates() -> Vec<StrategyTemplate> {
    vec![
        StrategyTemplate {
            strategy: "Customer Loyalty Program".to_string(),
            description: "Implement or enhance loyalty program to increase retention."
                .to_string(),
            tactics: vec![
                "Design tiered reward structure".to_string(),
                "Implement personalized loyalty benefits".to_string(),
                "Develop exclusive content/features for loyal customers".to_string(),
                "Create community elements for customer engagement".to_string(),
            ],
            suitable_for: vec![
                "retail".to_string(),
                "b2c".to_string(),
                "subscription".to_string(),
                "service".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Customer Experience Enhancement".to_string(),
            description: "Improve customer experience across touchpoints.".to_string(),
            tactics: vec![
                "Map customer journey and identify friction points".to_string(),
                "Implement customer feedback loops".to_string(),
                "Enhance customer support capabilities".to_string(),
                "Develop proactive engagement strategies".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "b2c".to_string(),
                "service".to_string(),
                "subscription".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Value-Added Services".to_string(),
            description: "Develop complementary services to increase customer value."
                .to_string(),
            tactics: vec![
                "Identify high-value service opportunities".to_string(),
                "Develop bundling strategies".to_string(),
                "Create educational content and resources".to_string(),
                "Implement success management for key accounts".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "saas".to_string(),
                "premium".to_string(),
                "service".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Personalization Strategy".to_string(),
            description: "Implement data-driven personalization across customer interactions."
                .to_string(),
            tactics: vec![
                "Enhance customer data collection and integration".to_string(),
                "Develop personalized content strategy".to_string(),
                "Implement behavioral triggers for engagement".to_string(),
                "Create personalized product recommendations".to_string(),
            ],
            suitable_for: vec![
                "e_commerce".to_string(),
                "b2c".to_string(),
                "retail".to_string(),
                "subscription".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
    ]
}

fn product_launch_templates() -> Vec<StrategyTemplate> {
    vec![
        StrategyTemplate {
            strategy: "Market Penetration Strategy".to_string(),
            description: "Aggressive entry to quickly gain market share.".to_string(),
            tactics: vec![
                "Competitive pricing strategy".to_string(),
                "High-visibility promotional campaign".to_string(),
                "Strategic partnerships for distribution".to_string(),
                "Early adopter incentive program".to_string(),
            ],
            suitable_for: vec![
                "b2c".to_string(),
                "tech".to_string(),
                "startup".to_string(),
                "consumer_goods".to_string(),
            ],
            time_horizon: vec!["short_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Thought Leadership Campaign".to_string(),
            description: "Establish category leadership through expertise.".to_string(),
            tactics: vec![
                "Develop educational content series".to_string(),
                "Secure speaking opportunities at industry events".to_string(),
                "Publish original research/white papers".to_string(),
                "Build relationships with industry influencers".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "saas".to_string(),
                "professional_services".to_string(),
                "tech".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Phased Rollout Strategy".to_string(),
            description: "Controlled launch across segments to optimize product.".to_string(),
            tactics: vec![
                "Identify beta testing customer segments".to_string(),
                "Develop feedback collection mechanisms".to_string(),
                "Create rapid iteration processes".to_string(),
                "Plan phase-based expansion roadmap".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "tech".to_string(),
                "saas".to_string(),
                "complex_products".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Integrated Launch Campaign".to_string(),
            description: "Coordinated multi-channel campaign for maximum impact.".to_string(),
            tactics: vec![
                "Develop unified messaging strategy".to_string(),
                "Create coordinated content across channels".to_string(),
                "Plan sequential reveal strategy".to_string(),
                "Implement measurement framework for optimization".to_string(),
            ],
            suitable_for: vec![
                "b2c".to_string(),
                "consumer_goods".to_string(),
                "retail".to_string(),
                "e_commerce".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
    ]
}

fn brand_awareness_templates() -> Vec<StrategyTemplate> {
    vec![
        StrategyTemplate {
            strategy: "Content Marketing Strategy".to_string(),
            description: "Build awareness through valuable content.".to_string(),
            tactics: vec![
                "Develop content pillars aligned with audience interests".to_string(),
                "Create multi-format content strategy".to_string(),
                "Implement SEO optimization for discoverability".to_string(),
                "Establish content distribution partnerships".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "b2c".to_string(),
                "service".to_string(),
                "thought_leadership".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Influencer Partnership Program".to_string(),
            description: "Leverage influencers to expand brand reach.".to_string(),
            tactics: vec![
                "Identify relevant influencers across tiers".to_string(),
                "Develop authentic partnership frameworks".to_string(),
                "Create co-branded content opportunities".to_string(),
                "Implement performance-based compensation models".to_string(),
            ],
            suitable_for: vec![
                "b2c".to_string(),
                "consumer_goods".to_string(),
                "lifestyle".to_string(),
                "e_commerce".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Community Building Initiative".to_string(),
            description: "Create engaged community around brand values.".to_string(),
            tactics: vec![
                "Develop community platform strategy".to_string(),
                "Create valuable engagement opportunities".to_string(),
                "Implement user-generated content program".to_string(),
                "Establish ambassador program for advocates".to_string(),
            ],
            suitable_for: vec![
                "b2c".to_string(),
                "lifestyle".to_string(),
                "value_driven".to_string(),
                "subscription".to_string(),
            ],
            time_horizon: vec!["medium_term".to_string(), "long_term".to_string()],
        },
        StrategyTemplate {
            strategy: "Strategic PR Campaign".to_string(),
            description: "Generate earned media coverage for brand.".to_string(),
            tactics: vec![
                "Develop newsworthy storylines".to_string(),
                "Build relationships with key media outlets".to_string(),
                "Create press kit and supporting materials".to_string(),
                "Plan staged announcement strategy".to_string(),
            ],
            suitable_for: vec![
                "b2b".to_string(),
                "b2c".to_string(),
                "launch".to_string(),
                "corporate".to_string(),
            ],
            time_horizon: vec!["short_term".to_string(), "medium_term".to_string()],
        },
    ]
}
