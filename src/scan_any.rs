use serde_json::Value;

use crate::matcher::Matcher;

pub(crate) fn scan_any<M: Matcher + ?Sized>(matcher: &M, value: &Value) -> bool {
    match value {
        Value::String(s) => matcher.is_match(s),
        Value::Object(map) => map.values().any(|v| scan_any(matcher, v)),
        Value::Array(items) => items.iter().any(|v| scan_any(matcher, v)),
        // numbers, booleans and null carry no text
        _ => false,
    }
}
