//! Construction sources and the serde-loadable filter configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::Engine;
use crate::error::{FilterError, Result};

/// Where a filter takes its initial entries from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSource {
    /// The word list bundled with the crate
    #[default]
    Default,
    /// An explicit list of entries
    Words(Vec<String>),
    /// A text file holding one entry per line
    Datafile(PathBuf),
}

impl From<Vec<String>> for FilterSource {
    fn from(words: Vec<String>) -> Self {
        FilterSource::Words(words)
    }
}

impl From<&[&str]> for FilterSource {
    fn from(words: &[&str]) -> Self {
        FilterSource::Words(words.iter().map(|w| (*w).to_owned()).collect())
    }
}

impl From<PathBuf> for FilterSource {
    fn from(path: PathBuf) -> Self {
        FilterSource::Datafile(path)
    }
}

impl From<&Path> for FilterSource {
    fn from(path: &Path) -> Self {
        FilterSource::Datafile(path.to_path_buf())
    }
}

/// Filter configuration, e.g.
///
/// ```json
/// { "datafile": "words.txt", "engine": "double_array" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub blacklist: Option<Vec<String>>,
    pub datafile: Option<PathBuf>,
    pub engine: Engine,
}

impl FilterConfig {
    /// # Errors
    /// * the document is not a valid configuration object
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// # Errors
    /// * the file cannot be read, or holds an invalid configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| FilterError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Resolves which source to construct from.
    ///
    /// A datafile wins over an explicit blacklist when both are set.
    pub fn source(&self) -> FilterSource {
        match (&self.datafile, &self.blacklist) {
            (Some(path), Some(_)) => {
                warn!(
                    datafile = %path.display(),
                    "both blacklist and datafile configured, using datafile"
                );
                FilterSource::Datafile(path.clone())
            }
            (Some(path), None) => FilterSource::Datafile(path.clone()),
            (None, Some(words)) => FilterSource::Words(words.clone()),
            (None, None) => FilterSource::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FilterConfig::from_json_str("{}").unwrap();
        assert_eq!(config.engine, Engine::AhoCorasick);
        assert_eq!(config.source(), FilterSource::Default);
    }

    #[test]
    fn test_datafile_takes_precedence() {
        let config = FilterConfig::from_json_str(
            r#"{"blacklist": ["a"], "datafile": "words.txt", "engine": "regex"}"#,
        )
        .unwrap();
        assert_eq!(config.engine, Engine::Regex);
        assert_eq!(config.source(), FilterSource::Datafile(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_explicit_blacklist() {
        let config = FilterConfig::from_json_str(r#"{"blacklist": ["a", "b"]}"#).unwrap();
        assert_eq!(
            config.source(),
            FilterSource::Words(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            FilterConfig::from_json_str(r#"{"words": []}"#),
            Err(FilterError::Config(_))
        ));
        assert!(matches!(
            FilterConfig::from_json_str(r#"{"engine": "bogus"}"#),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"blacklist": ["x"], "engine": "double_array"}}"#).unwrap();

        let config = FilterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.engine, Engine::DoubleArray);
        assert_eq!(config.source(), FilterSource::Words(vec!["x".to_string()]));
    }

    #[test]
    fn test_from_missing_file() {
        let err = FilterConfig::from_file("/definitely/not/here.json").unwrap_err();
        match err {
            FilterError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
