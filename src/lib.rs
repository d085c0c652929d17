//! Case-insensitive word blacklist filtering.
//!
//! ```
//! use wordfilter::{FilterSource, Wordfilter};
//!
//! let mut wf = Wordfilter::new(FilterSource::Words(vec!["custom".into()])).unwrap();
//! assert!(wf.blacklisted("a CUSTOM blacklist"));
//!
//! wf.add_words("Clean").unwrap();
//! assert!(wf.blacklisted("this string was clean!"));
//!
//! wf.remove_words(vec!["custom", "clean"]).unwrap();
//! assert!(!wf.blacklisted("custom and clean"));
//! ```
//!
//! The functions in [`default_filter`] share one process-wide filter seeded
//! from the bundled word list.

pub mod ac_matcher;
pub mod config;
pub mod daac_matcher;
pub mod default_filter;
pub mod default_list;
pub mod engine;
pub mod error;
pub mod matcher;
#[cfg(feature = "python")]
pub mod pymodule;
pub mod regex_matcher;
mod scan_any;
pub mod wordfilter;
pub mod words;

pub use crate::config::{FilterConfig, FilterSource};
pub use crate::default_filter::{add_words, blacklisted, clear_list, remove_words};
pub use crate::engine::Engine;
pub use crate::error::{FilterError, Result};
pub use crate::wordfilter::Wordfilter;
pub use crate::words::WordInput;
