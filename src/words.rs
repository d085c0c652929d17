//! Accepted input shapes for adding and removing entries.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

use crate::error::{FilterError, Result};

/// Lowercases a word the way every stored entry is normalized.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Input to [`Wordfilter::add_words`](crate::Wordfilter::add_words) and
/// [`Wordfilter::remove_words`](crate::Wordfilter::remove_words).
///
/// A single string is always one entry and is never split. A sequence is
/// consumed once, in order; each element is validated on its own, so a
/// sequence built from dynamic data may yield an error part way through.
pub enum WordInput<'a> {
    Single(Cow<'a, str>),
    Sequence(Box<dyn Iterator<Item = Result<String>> + 'a>),
}

impl<'a> WordInput<'a> {
    /// Wraps any (possibly one-shot) producer of strings.
    pub fn sequence<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S> + 'a,
        I::IntoIter: 'a,
        S: Into<String> + 'a,
    {
        WordInput::Sequence(Box::new(words.into_iter().map(|w| Ok(w.into()))))
    }

    /// Wraps a producer whose elements still need validating.
    pub fn fallible<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Result<String>>,
        I::IntoIter: 'a,
    {
        WordInput::Sequence(Box::new(words.into_iter()))
    }

    /// Drains the input into normalized entries.
    ///
    /// Nothing is returned unless every element was valid.
    pub(crate) fn into_entries(self) -> Result<Vec<String>> {
        match self {
            WordInput::Single(word) => Ok(vec![normalize(&word)]),
            WordInput::Sequence(words) => words.map(|w| w.map(|w| normalize(&w))).collect(),
        }
    }
}

impl fmt::Debug for WordInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordInput::Single(word) => f.debug_tuple("Single").field(word).finish(),
            WordInput::Sequence(_) => f.write_str("Sequence(..)"),
        }
    }
}

impl<'a> From<&'a str> for WordInput<'a> {
    fn from(word: &'a str) -> Self {
        WordInput::Single(Cow::Borrowed(word))
    }
}

impl From<String> for WordInput<'_> {
    fn from(word: String) -> Self {
        WordInput::Single(Cow::Owned(word))
    }
}

impl<'a> From<&'a String> for WordInput<'a> {
    fn from(word: &'a String) -> Self {
        WordInput::Single(Cow::Borrowed(word.as_str()))
    }
}

impl<'a, S> From<Vec<S>> for WordInput<'a>
where
    S: Into<String> + 'a,
{
    fn from(words: Vec<S>) -> Self {
        WordInput::sequence(words)
    }
}

impl<'a, S, const N: usize> From<[S; N]> for WordInput<'a>
where
    S: Into<String> + 'a,
{
    fn from(words: [S; N]) -> Self {
        WordInput::sequence(words)
    }
}

impl<'a, S> From<&'a [S]> for WordInput<'a>
where
    S: AsRef<str>,
{
    fn from(words: &'a [S]) -> Self {
        WordInput::sequence(words.iter().map(|w| w.as_ref().to_owned()))
    }
}

/// JSON type name used in [`FilterError::InvalidInput`] messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Dynamic input: a string is one entry, an array must hold only strings,
/// anything else is rejected.
impl TryFrom<Value> for WordInput<'static> {
    type Error = FilterError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(word) => Ok(WordInput::Single(Cow::Owned(word))),
            Value::Array(items) => Ok(WordInput::fallible(items.into_iter().map(
                |item| match item {
                    Value::String(word) => Ok(word),
                    other => Err(FilterError::invalid_input(format!(
                        "array containing {}",
                        kind(&other)
                    ))),
                },
            ))),
            other => Err(FilterError::invalid_input(kind(&other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_string_is_not_split() {
        let entries = WordInput::from("Two Words").into_entries().unwrap();
        assert_eq!(entries, vec!["two words"]);
    }

    #[test]
    fn test_sequence_is_normalized_in_order() {
        let entries = WordInput::from(vec!["B", "a", "B"]).into_entries().unwrap();
        assert_eq!(entries, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_borrowed_inputs() {
        let owned = String::from("Borrowed Word");
        let entries = WordInput::from(&owned).into_entries().unwrap();
        assert_eq!(entries, vec!["borrowed word"]);

        let words = vec![String::from("One"), String::from("TWO")];
        let entries = WordInput::from(words.as_slice()).into_entries().unwrap();
        assert_eq!(entries, vec!["one", "two"]);

        let slice: &[&str] = &["X", "y"];
        let entries = WordInput::from(slice).into_entries().unwrap();
        assert_eq!(entries, vec!["x", "y"]);
    }

    #[test]
    fn test_one_shot_producer() {
        let producer = std::iter::once("Test".to_string());
        let entries = WordInput::sequence(producer).into_entries().unwrap();
        assert_eq!(entries, vec!["test"]);
    }

    #[test]
    fn test_json_inputs() {
        let entries = WordInput::try_from(json!("Clean")).unwrap().into_entries().unwrap();
        assert_eq!(entries, vec!["clean"]);

        let entries = WordInput::try_from(json!(["x", "Y"])).unwrap().into_entries().unwrap();
        assert_eq!(entries, vec!["x", "y"]);
    }

    #[test]
    fn test_json_rejects_non_strings() {
        let err = WordInput::try_from(json!(9)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidInput { ref found } if found == "number"));

        assert!(WordInput::try_from(json!({"a": "b"})).is_err());
        assert!(WordInput::try_from(json!(null)).is_err());

        let input = WordInput::try_from(json!(["ok", 9])).unwrap();
        assert!(matches!(input.into_entries(), Err(FilterError::InvalidInput { .. })));
    }
}
