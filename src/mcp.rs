//! Tool surface for agent integration
//!
//! Exposes the engine as a single named tool with a JSON argument
//! schema, the shape MCP-style agent runtimes expect. The engine core
//! is infallible; the only error paths here are unknown tool names and
//! malformed argument JSON.

use crate::engine::RecommendationEngine;
use crate::templates::Catalog;
use crate::types::RecommendationRequest;
use anyhow::Result;
use serde_json::{json, Value};

pub const RECOMMEND_TOOL: &str = "recommend_marketing_strategy";

/// Tool definitions for the agent runtime
pub fn get_tools() -> Vec<Value> {
    vec![json!({
        "name": RECOMMEND_TOOL,
        "description": "Generates strategic marketing recommendations based on business objectives, market conditions, and other factors. Returns recommended strategies, a phased implementation plan, expected outcomes, a risk assessment, and (when a budget is given) a budget allocation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "business_objective": {
                    "type": "string",
                    "description": "The primary business objective (e.g., 'increase_market_share', 'improve_customer_retention', 'launch_new_product')"
                },
                "market_segment": {
                    "type": "string",
                    "description": "The target market segment for the recommendations"
                },
                "time_horizon": {
                    "type": "string",
                    "description": "Time horizon for the recommendations: 'short_term' (1-3 months), 'medium_term' (3-12 months), 'long_term' (1+ years)",
                    "default": "short_term"
                },
                "available_budget": {
                    "type": "string",
                    "description": "Budget constraints, if applicable (e.g., 'low', 'medium', 'high', or specific amount)"
                },
                "current_challenges": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "List of current challenges or obstacles facing the business"
                }
            },
            "required": ["business_objective", "market_segment"]
        }
    })]
}

/// Dispatch one tool call against the catalog
pub fn handle_tool_call(catalog: &Catalog, name: &str, arguments: &Value) -> Result<Value> {
    match name {
        RECOMMEND_TOOL => {
            let request: RecommendationRequest = serde_json::from_value(arguments.clone())
                .map_err(|e| anyhow::anyhow!("Invalid arguments for {}: {}", name, e))?;
            let engine = RecommendationEngine::new(catalog);
            Ok(serde_json::to_value(engine.recommend(&request))?)
        }
        _ => anyhow::bail!("Unknown tool: {}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definitions() {
        let tools = get_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], RECOMMEND_TOOL);
        let required = tools[0]["inputSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 2);
    }

    #[test]
    fn test_handle_tool_call_happy_path() {
        let catalog = Catalog::builtin();
        let arguments = json!({
            "business_objective": "increase_market_share",
            "market_segment": "b2c retail",
            "time_horizon": "short_term"
        });
        let result = handle_tool_call(&catalog, RECOMMEND_TOOL, &arguments).unwrap();
        assert_eq!(result["implementation_plan"]["timeline_unit"], "weeks");
        assert_eq!(result["implementation_plan"]["total_duration"], 12);
        assert!(result.get("budget_allocation").is_none());
    }

    #[test]
    fn test_handle_tool_call_defaults_horizon() {
        let catalog = Catalog::builtin();
        let arguments = json!({
            "business_objective": "launch new product",
            "market_segment": "consumer goods"
        });
        let result = handle_tool_call(&catalog, RECOMMEND_TOOL, &arguments).unwrap();
        assert_eq!(result["time_horizon"], "short_term");
    }

    #[test]
    fn test_handle_tool_call_unknown_tool() {
        let catalog = Catalog::builtin();
        let err = handle_tool_call(&catalog, "no_such_tool", &json!({})).unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }

    #[test]
    fn test_handle_tool_call_malformed_arguments() {
        let catalog = Catalog::builtin();
        let err = handle_tool_call(&catalog, RECOMMEND_TOOL, &json!({"market_segment": 42}))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid arguments"));
    }

    #[test]
    fn test_handle_tool_call_with_budget_and_challenges() {
        let catalog = Catalog::builtin();
        let arguments = json!({
            "business_objective": "improve_customer_retention",
            "market_segment": "subscription",
            "available_budget": "medium",
            "current_challenges": ["high churn"]
        });
        let result = handle_tool_call(&catalog, RECOMMEND_TOOL, &arguments).unwrap();
        assert!(result.get("budget_allocation").is_some());
        assert!(result["risk_assessment"]["key_risks"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "Existing challenge: high churn"));
    }
}
