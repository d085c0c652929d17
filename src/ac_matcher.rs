use aho_corasick::AhoCorasick;

use crate::engine::Engine;
use crate::error::{Result, build_error};
use crate::matcher::Matcher;

#[derive(Clone, Debug)]
pub struct AcMatcher {
    pub ac: AhoCorasick,
}

impl AcMatcher {
    /// # Errors
    /// * automaton exceeds aho-corasick's size limits
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words_lower: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        let ac = AhoCorasick::new(&words_lower).map_err(build_error(Engine::AhoCorasick))?;
        Ok(Self { ac })
    }
}

impl Matcher for AcMatcher {
    fn is_match(&self, s: &str) -> bool {
        self.ac.is_match(&s.to_lowercase())
    }
}
