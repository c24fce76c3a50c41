use serde_json::Value;

use crate::models::ApiError;

// Largest integer a JS number holds exactly (2^53).
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Two-space indented JSON, the same shape `JSON.stringify(v, null, 2)` gives.
///
/// Object keys keep the order the server sent them in, and whole-number
/// floats print without a fraction (`1.0` becomes `1`).
pub fn render_json(value: &Value) -> String {
    let shaped = whole_floats_as_ints(value);
    // serialising a Value cannot fail
    serde_json::to_string_pretty(&shaped).unwrap_or_else(|_| shaped.to_string())
}

fn whole_floats_as_ints(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_SAFE_FLOAT => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(whole_floats_as_ints).collect()),
        Value::Object(map) => Value::Object(map.iter().map(|(k, v)| (k.clone(), whole_floats_as_ints(v))).collect()),
        _ => value.clone(),
    }
}

pub fn render_error(err: &ApiError) -> String {
    format!("error: {}", err)
}

pub fn render_outcome(outcome: &Result<Value, ApiError>) -> String {
    match outcome {
        Ok(v) => render_json(v),
        Err(e) => render_error(e),
    }
}
