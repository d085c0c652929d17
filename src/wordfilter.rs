//! The blacklist filter.

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{FilterConfig, FilterSource};
use crate::default_list::default_words;
use crate::engine::{Automaton, Engine};
use crate::error::{FilterError, Result};
use crate::matcher::Matcher;
use crate::words::{WordInput, normalize};

/// A mutable set of blacklisted entries.
///
/// Entries are stored lowercase and matched as plain substrings of the
/// lowercased input, so `"ass"` is found inside `"class"`. The automaton is
/// rebuilt whenever the entry set actually changes.
#[derive(Debug)]
pub struct Wordfilter {
    entries: HashSet<String>,
    engine: Engine,
    automaton: Option<Automaton>,
}

impl Default for Wordfilter {
    fn default() -> Self {
        Self::empty(Engine::default())
    }
}

impl Wordfilter {
    /// Builds a filter with the default engine.
    ///
    /// # Errors
    /// * `FilterError::Io` when a datafile cannot be read
    /// * `FilterError::DefaultList` when the bundled list is malformed
    /// * `FilterError::Build` when the automaton cannot be compiled
    pub fn new(source: FilterSource) -> Result<Self> {
        Self::with_engine(source, Engine::default())
    }

    /// Builds a filter from `source` using `engine`.
    ///
    /// # Errors
    /// * see [`Wordfilter::new`]
    pub fn with_engine(source: FilterSource, engine: Engine) -> Result<Self> {
        let words = match source {
            FilterSource::Default => default_words()?,
            FilterSource::Words(words) => words,
            FilterSource::Datafile(path) => read_datafile(&path)?,
        };
        let entries: HashSet<String> = words.iter().map(|w| normalize(w)).collect();
        let automaton = Automaton::build(engine, &entries)?;
        info!(entries = entries.len(), %engine, "wordfilter ready");
        Ok(Self {
            entries,
            engine,
            automaton,
        })
    }

    /// # Errors
    /// * see [`Wordfilter::new`]
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        Self::with_engine(config.source(), config.engine)
    }

    /// A filter with no entries; nothing is blacklisted.
    #[must_use]
    pub fn empty(engine: Engine) -> Self {
        Self {
            entries: HashSet::new(),
            engine,
            automaton: None,
        }
    }

    /// Adds entries; entries already present are ignored.
    ///
    /// # Errors
    /// * `FilterError::InvalidInput` when the input, or any element of it,
    ///   is not a string. The entry set is left untouched.
    /// * `FilterError::Build` when the new automaton cannot be compiled
    pub fn add_words<'a, W>(&mut self, input: W) -> Result<()>
    where
        W: TryInto<WordInput<'a>>,
        FilterError: From<W::Error>,
    {
        let staged = input.try_into()?.into_entries()?;
        let mut next = self.entries.clone();
        let before = next.len();
        next.extend(staged);
        if next.len() == before {
            return Ok(());
        }
        debug!(added = next.len() - before, "adding blacklist entries");
        self.commit(next)
    }

    /// Removes entries; absent entries are ignored.
    ///
    /// # Errors
    /// * same as [`Wordfilter::add_words`]
    pub fn remove_words<'a, W>(&mut self, input: W) -> Result<()>
    where
        W: TryInto<WordInput<'a>>,
        FilterError: From<W::Error>,
    {
        let staged = input.try_into()?.into_entries()?;
        let mut next = self.entries.clone();
        let before = next.len();
        for word in &staged {
            next.remove(word);
        }
        if next.len() == before {
            return Ok(());
        }
        debug!(removed = before - next.len(), "removing blacklist entries");
        self.commit(next)
    }

    /// Drops every entry.
    pub fn clear_list(&mut self) {
        debug!(removed = self.entries.len(), "clearing blacklist");
        self.entries.clear();
        self.automaton = None;
    }

    /// True when any entry occurs in `text`, ignoring case.
    #[must_use]
    pub fn blacklisted(&self, text: &str) -> bool {
        self.automaton.as_ref().is_some_and(|m| m.is_match(text))
    }

    /// Walks strings nested anywhere inside `value`.
    #[must_use]
    pub fn blacklisted_any(&self, value: &Value) -> bool {
        self.automaton.as_ref().is_some_and(|m| m.scan_any(value))
    }

    /// The current entry set.
    #[must_use]
    pub fn blacklist(&self) -> &HashSet<String> {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(&normalize(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn engine(&self) -> Engine {
        self.engine
    }

    // Compile before swapping so a build failure leaves the filter as it was.
    fn commit(&mut self, entries: HashSet<String>) -> Result<()> {
        let automaton = Automaton::build(self.engine, &entries)?;
        self.entries = entries;
        self.automaton = automaton;
        Ok(())
    }
}

/// One entry per non-empty line.
fn read_datafile(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| FilterError::io(path, e))?;
    let words: Vec<String> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    debug!(path = %path.display(), lines = words.len(), "read word list");
    Ok(words)
}
