//! Recommendation Engine: the single entry point over the pipeline
//!
//! Normalizes the caller's free-form inputs, selects strategies, then
//! runs the planner, outcome estimator, risk assessor, and (when a
//! budget is supplied) the budget allocator independently over the
//! selection. Pure function of inputs plus the injected catalog: no
//! I/O, no clocks, no randomness - identical requests produce
//! structurally identical results.

use crate::budget::allocate;
use crate::outcome::estimate;
use crate::plan::build_plan;
use crate::risk::assess;
use crate::templates::{select_strategies, Catalog};
use crate::types::{RecommendationRequest, RecommendationResult};

/// The engine holds a reference to the static knowledge base
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Generate a full strategy recommendation for one request
    pub fn recommend(&self, request: &RecommendationRequest) -> RecommendationResult {
        let objective = normalize(&request.business_objective);
        let segment = normalize(&request.market_segment);
        let horizon = normalize(&request.time_horizon);

        tracing::info!(
            "Generating strategy recommendations for {} in {} segment",
            objective,
            segment
        );

        let strategies = select_strategies(self.catalog, &objective, &segment, &horizon);

        let implementation_plan = build_plan(&strategies, &horizon);
        let expected_outcomes = estimate(self.catalog, &objective, &strategies);
        let risk_assessment = assess(self.catalog, &strategies, &request.current_challenges);
        let budget_allocation = request
            .available_budget
            .as_deref()
            .map(|level| allocate(&strategies, level));

        RecommendationResult {
            business_objective: objective,
            market_segment: segment,
            time_horizon: horizon,
            available_budget: request.available_budget.clone(),
            recommended_strategies: strategies,
            implementation_plan,
            expected_outcomes,
            risk_assessment,
            budget_allocation,
        }
    }
}

/// Lowercase, spaces to underscores - callers may supply either form
pub(crate) fn normalize(input: &str) -> String {
    input.to_lowercase().replace(' ', "_")
}
