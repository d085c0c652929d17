//! The word list bundled with the crate.

use crate::error::{FilterError, Result};

const BADWORDS_JSON: &str = include_str!("../data/badwords.json");

/// Parses the bundled `badwords.json` (a JSON array of strings).
///
/// # Errors
/// * the embedded document is not an array of strings
pub fn default_words() -> Result<Vec<String>> {
    serde_json::from_str(BADWORDS_JSON).map_err(FilterError::DefaultList)
}
