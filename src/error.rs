//! Error type shared by every filter operation.

use std::convert::Infallible;
use std::path::PathBuf;
use thiserror::Error;

use crate::engine::Engine;

#[derive(Error, Debug)]
pub enum FilterError {
    /// Input to add/remove was neither a string nor a sequence of strings
    #[error("expected a string or a sequence of strings, got {found}")]
    InvalidInput { found: String },

    /// Word list file could not be read
    #[error("cannot read word list '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bundled default word list is not a JSON array of strings
    #[error("bundled word list is malformed: {0}")]
    DefaultList(#[source] serde_json::Error),

    /// Automaton could not be compiled from the current entries
    #[error("cannot build {engine} matcher: {message}")]
    Build { engine: Engine, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub fn invalid_input(found: impl Into<String>) -> Self {
        Self::InvalidInput {
            found: found.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// common function to report engine build errors
/// # Errors
/// * when aho-corasick, regex set or daachorse fails to build
pub fn build_error<E: std::fmt::Display>(engine: Engine) -> impl FnOnce(E) -> FilterError {
    move |e| FilterError::Build {
        engine,
        message: e.to_string(),
    }
}

// Lets infallible `From` conversions flow through the `TryInto` bounds on add/remove.
impl From<Infallible> for FilterError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
