use regex::{RegexSet, escape};

use crate::engine::Engine;
use crate::error::{Result, build_error};
use crate::matcher::Matcher;

#[derive(Clone, Debug)]
pub struct RegexMatcher {
    rs: RegexSet,
}

impl Matcher for RegexMatcher {
    /// implements matching with regex set
    fn is_match(&self, s: &str) -> bool {
        // Convert input to lowercase for case-insensitive matching
        self.rs.is_match(&s.to_lowercase())
    }
}

impl RegexMatcher {
    /// constructor
    /// # Errors
    /// * compiled set exceeds the regex size limit (very large word lists)
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Entries are literals, never patterns
        let patterns: Vec<String> = words
            .into_iter()
            .map(|w| escape(&w.as_ref().to_lowercase()))
            .collect();

        let rs = RegexSet::new(patterns).map_err(build_error(Engine::Regex))?;

        Ok(Self { rs })
    }
}
