//! Process-wide default filter.
//!
//! One [`Wordfilter`] seeded from the bundled word list lives for the whole
//! process. It is created on first use and every function in this module
//! operates on that same instance, so a mutation made by any caller is seen
//! by all later callers on any thread. Each function holds the lock for the
//! duration of its call only; use [`with_default_filter`] when several steps
//! must observe one consistent state.
//!
//! Lazy sequences passed to [`add_words`] or [`remove_words`] are drained
//! while the lock is held and must not call back into this module.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::error;

use crate::config::FilterSource;
use crate::engine::Engine;
use crate::error::{FilterError, Result};
use crate::words::WordInput;
use crate::wordfilter::Wordfilter;

static DEFAULT_FILTER: Lazy<Mutex<Wordfilter>> = Lazy::new(|| {
    let filter = Wordfilter::new(FilterSource::Default).unwrap_or_else(|err| {
        error!(%err, "bundled word list unavailable, default filter starts empty");
        Wordfilter::empty(Engine::default())
    });
    Mutex::new(filter)
});

/// Forces initialization of the default filter.
pub fn init_default_filter() {
    Lazy::force(&DEFAULT_FILTER);
}

/// Runs `f` with exclusive access to the default filter.
pub fn with_default_filter<R>(f: impl FnOnce(&mut Wordfilter) -> R) -> R {
    f(&mut DEFAULT_FILTER.lock())
}

/// [`Wordfilter::blacklisted`] on the default filter.
#[must_use]
pub fn blacklisted(text: &str) -> bool {
    DEFAULT_FILTER.lock().blacklisted(text)
}

/// [`Wordfilter::add_words`] on the default filter.
///
/// # Errors
/// * same as [`Wordfilter::add_words`]; the shared entry set is unchanged on error
pub fn add_words<'a, W>(input: W) -> Result<()>
where
    W: TryInto<WordInput<'a>>,
    FilterError: From<W::Error>,
{
    DEFAULT_FILTER.lock().add_words(input)
}

/// [`Wordfilter::remove_words`] on the default filter.
///
/// # Errors
/// * same as [`Wordfilter::remove_words`]
pub fn remove_words<'a, W>(input: W) -> Result<()>
where
    W: TryInto<WordInput<'a>>,
    FilterError: From<W::Error>,
{
    DEFAULT_FILTER.lock().remove_words(input)
}

/// [`Wordfilter::clear_list`] on the default filter.
pub fn clear_list() {
    DEFAULT_FILTER.lock().clear_list();
}

/// Sorted snapshot of the default filter's entries.
#[must_use]
pub fn blacklist() -> Vec<String> {
    let mut words: Vec<String> = DEFAULT_FILTER.lock().blacklist().iter().cloned().collect();
    words.sort_unstable();
    words
}
