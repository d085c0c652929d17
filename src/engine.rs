//! Engine selection and the compiled automaton owned by a filter.

use serde::Deserialize;
use std::fmt;

use crate::ac_matcher::AcMatcher;
use crate::daac_matcher::DaacMatcher;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::regex_matcher::RegexMatcher;

/// Multi-pattern engine used to search for entries.
///
/// All engines implement the same literal, case-insensitive substring
/// semantics and differ only in build and scan costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    #[default]
    AhoCorasick,
    Regex,
    DoubleArray,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::AhoCorasick, Engine::Regex, Engine::DoubleArray];
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::AhoCorasick => "aho-corasick",
            Engine::Regex => "regex",
            Engine::DoubleArray => "double-array",
        })
    }
}

#[derive(Debug)]
pub(crate) enum Automaton {
    Ac(AcMatcher),
    Regex(RegexMatcher),
    Daac(DaacMatcher),
}

impl Automaton {
    /// Compiles `entries` with `engine`; `None` when there is nothing to match.
    pub(crate) fn build<'a, I>(engine: Engine, entries: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = &'a String>,
        I::IntoIter: ExactSizeIterator,
    {
        let entries = entries.into_iter();
        if entries.len() == 0 {
            return Ok(None);
        }
        let automaton = match engine {
            Engine::AhoCorasick => Automaton::Ac(AcMatcher::new(entries)?),
            Engine::Regex => Automaton::Regex(RegexMatcher::new(entries)?),
            Engine::DoubleArray => Automaton::Daac(DaacMatcher::new(entries)?),
        };
        Ok(Some(automaton))
    }
}

impl Matcher for Automaton {
    fn is_match(&self, s: &str) -> bool {
        match self {
            Automaton::Ac(m) => m.is_match(s),
            Automaton::Regex(m) => m.is_match(s),
            Automaton::Daac(m) => m.is_match(s),
        }
    }
}
