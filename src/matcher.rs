use serde_json::Value;

use crate::scan_any;

/// A compiled set of literal patterns searched case-insensitively.
pub trait Matcher {
    fn is_match(&self, s: &str) -> bool;

    /// Shared logic: The recursive engine for any JSON value
    fn scan_any(&self, value: &Value) -> bool {
        scan_any::scan_any(self, value)
    }
}
