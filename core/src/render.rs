use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

// Arrays are flattened to comma-joined strings.
pub fn to_pretty_text<T: Serialize>(data: &T) -> Result<String> {
    let value = flatten_lists(serde_json::to_value(data)?);
    Ok(serde_json::to_string_pretty(&value)?)
}

fn flatten_lists(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::String(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, flatten_lists(v)))
                .collect(),
        ),
        other => other,
    }
}
