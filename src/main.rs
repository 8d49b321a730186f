//! marketminds tool runner
//!
//! Thin JSON front-end over the engine:
//!
//! - `marketminds --tools` prints the tool definitions
//! - `marketminds '<json arguments>'` runs one recommendation
//! - `marketminds` with no args reads the arguments JSON from stdin
//!
//! The arguments may be wrapped in a `{"tool": ..., "arguments": ...}`
//! envelope or passed bare, in which case the recommend tool is assumed.

use anyhow::Result;
use marketminds::templates::Catalog;
use marketminds::{get_tools, handle_tool_call, RECOMMEND_TOOL};
use serde_json::Value;
use std::io::Read;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--tools" {
        println!("{}", serde_json::to_string_pretty(&get_tools())?);
        return Ok(());
    }

    let input = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let payload: Value = serde_json::from_str(input.trim())?;
    let (tool, arguments) = match (payload.get("tool"), payload.get("arguments")) {
        (Some(tool), Some(arguments)) => (
            tool.as_str()
                .ok_or_else(|| anyhow::anyhow!("'tool' must be a string"))?
                .to_string(),
            arguments.clone(),
        ),
        _ => (RECOMMEND_TOOL.to_string(), payload),
    };

    let catalog = Catalog::builtin();
    let result = handle_tool_call(&catalog, &tool, &arguments)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
