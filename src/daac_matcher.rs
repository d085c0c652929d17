use daachorse::DoubleArrayAhoCorasick as Daac;
use daachorse::DoubleArrayAhoCorasickBuilder as DaacBld;
use daachorse::MatchKind::LeftmostFirst;

use crate::engine::Engine;
use crate::error::{Result, build_error};
use crate::matcher::Matcher;

/// Double-array Aho-Corasick matcher.
///
/// daachorse rejects empty patterns and empty pattern sets, so the empty
/// entry is tracked on the side and the automaton is only built when at least
/// one non-empty word remains.
pub struct DaacMatcher {
    pub daac: Option<Daac<usize>>,
    matches_empty: bool,
}

impl std::fmt::Debug for DaacMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaacMatcher")
            .field("built", &self.daac.is_some())
            .field("matches_empty", &self.matches_empty)
            .finish()
    }
}

impl Matcher for DaacMatcher {
    /// Performs a case-insensitive leftmost-first pattern match against the automaton.
    ///
    /// This method lowercases the input and returns whether any pattern in the
    /// underlying DAAC matches as the leftmost match.
    fn is_match(&self, s: &str) -> bool {
        if self.matches_empty {
            return true;
        }
        match &self.daac {
            Some(daac) => daac.leftmost_find_iter(s.to_lowercase()).next().is_some(),
            None => false,
        }
    }
}

impl DaacMatcher {
    /// Creates a new DaacMatcher from the provided word list.
    ///
    /// The provided words are converted to lowercase and deduplicated before
    /// building a Double-Array Aho-Corasick automaton with leftmost-first
    /// matching.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Build`](crate::FilterError::Build) when the
    /// daachorse builder fails (for example, when the automaton grows past
    /// its state limit).
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words_lower: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        words_lower.sort_unstable();
        words_lower.dedup();

        let matches_empty = words_lower.first().is_some_and(String::is_empty);
        words_lower.retain(|w| !w.is_empty());

        let daac = if words_lower.is_empty() {
            None
        } else {
            let daac = DaacBld::new()
                .match_kind(LeftmostFirst)
                .build(&words_lower)
                .map_err(build_error(Engine::DoubleArray))?;
            Some(daac)
        };

        Ok(Self { daac, matches_empty })
    }
}
