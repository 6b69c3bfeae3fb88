//! Print category prefixes as JSON

use anyhow::Result;
use dirman_core::prefixes;
use serde_json::{Map, Value};

/// JSON object keyed by prefix code
pub fn to_json(long: bool) -> Value {
    let map: Map<String, Value> = prefixes::definitions()
        .iter()
        .map(|def| {
            let value = if long {
                serde_json::json!({ "short": def.short, "long": def.long })
            } else {
                Value::String(def.short.to_string())
            };
            (def.code.to_string(), value)
        })
        .collect();
    Value::Object(map)
}

pub fn run(long: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&to_json(long))?);
    Ok(())
}
