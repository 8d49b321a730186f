//! marketminds - Marketing Strategy Engine
//!
//! A deterministic, rule-based recommendation engine that turns a small
//! set of business-context inputs (objective, segment, horizon, budget,
//! challenges) into a structured strategic plan: candidate strategies,
//! a phased implementation schedule, projected outcomes, a risk
//! assessment, and an optional budget allocation.
//!
//! Every stage is a pure function over the immutable catalog - no I/O,
//! no randomness, no shared mutable state. Identical inputs always
//! produce identical output.
//!
//! # Quick Start
//!
//! ```rust
//! use marketminds::{Catalog, RecommendationEngine, RecommendationRequest};
//!
//! let catalog = Catalog::builtin();
//! let engine = RecommendationEngine::new(&catalog);
//! let result = engine.recommend(&RecommendationRequest {
//!     business_objective: "increase_market_share".to_string(),
//!     market_segment: "b2c retail".to_string(),
//!     time_horizon: "short_term".to_string(),
//!     available_budget: Some("medium".to_string()),
//!     current_challenges: vec![],
//! });
//! assert!(!result.recommended_strategies.is_empty());
//! ```
//!
//! # Architecture
//!
//! ```text
//! request ──▶ normalize ──▶ Strategy Selector
//!                               │
//!              ┌────────────┬───┴────────┬──────────────┐
//!              ▼            ▼            ▼              ▼
//!          Planner      Outcome      Risk          Budget
//!                       Estimator    Assessor      Allocator (optional)
//!              └────────────┴────────────┴──────────────┘
//!                               ▼
//!                      RecommendationResult
//! ```

pub mod budget;
pub mod engine;
pub mod mcp;
pub mod outcome;
pub mod plan;
pub mod risk;
pub mod templates;
pub mod types;

// Core API
pub use engine::RecommendationEngine;
pub use templates::{select_strategies, Catalog, DEFAULT_OBJECTIVE};
pub use types::*;

// Tool surface for agent runtimes
pub use mcp::{get_tools, handle_tool_call, RECOMMEND_TOOL};
