//! Core types for the marketminds strategy engine
//!
//! Every result type is a plain serde record - strings, integers, lists,
//! nested records - so a full `RecommendationResult` serializes directly
//! to the JSON shape the tool layer returns to agents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog entry describing one strategic approach, its tactics,
/// and the segments/horizons it applies to. Immutable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyTemplate {
    pub strategy: String,
    pub description: String,
    pub tactics: Vec<String>,
    /// Segment tags matched as substrings of the normalized market segment
    pub suitable_for: Vec<String>,
    /// Horizon tags this template is eligible for
    pub time_horizon: Vec<String>,
}

impl StrategyTemplate {
    /// Strip the matching metadata once a template has been selected
    pub fn to_selected(&self) -> SelectedStrategy {
        SelectedStrategy {
            strategy: self.strategy.clone(),
            description: self.description.clone(),
            tactics: self.tactics.clone(),
        }
    }
}

/// A strategy chosen for one request, owned by that request's result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedStrategy {
    pub strategy: String,
    pub description: String,
    pub tactics: Vec<String>,
}

/// Unit the implementation timeline is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimelineUnit {
    Weeks,
    Months,
    Quarters,
}

/// Phased schedule covering all selected strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplementationPlan {
    pub timeline_unit: TimelineUnit,
    pub total_duration: u32,
    pub phases: Vec<Phase>,
}

/// One time-boxed block of the plan, corresponding to one strategy.
/// Consecutive phases overlap by one unit so strategies can run in parallel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub start: u32,
    pub end: u32,
    pub key_milestones: Vec<Milestone>,
}

/// A tactic-completion checkpoint inside a phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub milestone: String,
    pub timeline: u32,
    /// Empty for the first milestone of a phase, otherwise the label of
    /// the immediately preceding milestone
    pub dependencies: Vec<String>,
}

/// Expected-outcome magnitude, derived from strategy count
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
}

impl ImpactTier {
    pub fn name(&self) -> &'static str {
        match self {
            ImpactTier::Low => "low",
            ImpactTier::Medium => "medium",
            ImpactTier::High => "high",
        }
    }
}

/// Projected outcomes for a recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeProjection {
    pub primary_metrics: Vec<String>,
    pub secondary_metrics: Vec<String>,
    pub estimated_impact: EstimatedImpact,
}

/// Impact statements nested under `estimated_impact` on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedImpact {
    pub overall_impact: String,
    pub timeline_to_results: String,
    /// Top two primary metrics
    pub key_performance_indicators: Vec<String>,
    pub success_criteria: String,
}

/// Bounded risk list with one mitigation per risk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Max 5 entries, insertion-ordered, de-duplicated
    pub key_risks: Vec<String>,
    pub mitigation_strategies: BTreeMap<String, String>,
}

/// Notional 100% budget split across strategies and spend categories.
///
/// Category percentages are reconciled to sum to exactly 100. Strategy
/// percentages are rounded independently and may drift a few points off
/// 100 - accepted behavior, not corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub budget_level: String,
    pub allocation_by_strategy: BTreeMap<String, String>,
    pub allocation_by_category: BTreeMap<String, String>,
}

/// Request for a strategy recommendation
///
/// String fields are accepted in arbitrary case/spacing and normalized
/// by the engine before any catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub business_objective: String,
    pub market_segment: String,
    #[serde(default = "default_time_horizon")]
    pub time_horizon: String,
    #[serde(default)]
    pub available_budget: Option<String>,
    #[serde(default)]
    pub current_challenges: Vec<String>,
}

fn default_time_horizon() -> String {
    "short_term".to_string()
}

/// Full recommendation response, assembled fresh per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub business_objective: String,
    pub market_segment: String,
    pub time_horizon: String,
    pub available_budget: Option<String>,
    pub recommended_strategies: Vec<SelectedStrategy>,
    pub implementation_plan: ImplementationPlan,
    pub expected_outcomes: OutcomeProjection,
    pub risk_assessment: RiskAssessment,
    /// Absent (not null) when the caller supplied no budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_allocation: Option<BudgetAllocation>,
}
