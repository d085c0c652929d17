//! Python bindings, built with the `python` feature.
//!
//! Mirrors the `wordfilter` Python package: a `Wordfilter` class plus module
//! level functions bound to the process-wide default filter.

use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyString, PyTuple};
use pyo3_stub_gen::define_stub_info_gatherer;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use std::path::PathBuf;

use crate::config::FilterConfig;
use crate::default_filter;
use crate::engine::Engine;
use crate::error::FilterError;
use crate::words::WordInput;
use crate::wordfilter::Wordfilter;

impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::InvalidInput { .. } => PyTypeError::new_err(err.to_string()),
            FilterError::Io { .. } => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn type_name(value: &Bound<'_, PyAny>) -> String {
    value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "object".to_owned())
}

/// A `str` is one entry; any other iterable must yield only `str`.
fn word_input<'py>(value: &Bound<'py, PyAny>) -> PyResult<WordInput<'py>> {
    if value.is_instance_of::<PyString>() {
        return Ok(WordInput::from(value.extract::<String>()?));
    }
    let iter = value
        .try_iter()
        .map_err(|_| FilterError::invalid_input(type_name(value)))?;
    Ok(WordInput::fallible(iter.map(|item| {
        let item = item.map_err(|e| FilterError::invalid_input(e.to_string()))?;
        if !item.is_instance_of::<PyString>() {
            return Err(FilterError::invalid_input(format!(
                "iterable containing {}",
                type_name(&item)
            )));
        }
        item.extract::<String>()
            .map_err(|e| FilterError::invalid_input(e.to_string()))
    })))
}

/// Recursive engine for any Python object: strings, dicts, lists and tuples.
fn scan_any(filter: &Wordfilter, value: &Bound<'_, PyAny>) -> PyResult<bool> {
    if value.is_instance_of::<PyString>() {
        return Ok(filter.blacklisted(&value.extract::<String>()?));
    }
    if let Ok(dict) = value.cast::<PyDict>() {
        for item in dict.values() {
            if scan_any(filter, &item)? {
                return Ok(true);
            }
        }
    } else if let Ok(list) = value.cast::<PyList>() {
        for item in list {
            if scan_any(filter, &item)? {
                return Ok(true);
            }
        }
    } else if let Ok(tuple) = value.cast::<PyTuple>() {
        for item in tuple {
            if scan_any(filter, &item)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn sorted(filter: &Wordfilter) -> Vec<String> {
    let mut words: Vec<String> = filter.blacklist().iter().cloned().collect();
    words.sort_unstable();
    words
}

#[gen_stub_pyclass]
#[pyclass(name = "Wordfilter", module = "wordfilter")]
pub struct PyWordfilter {
    inner: Wordfilter,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyWordfilter {
    /// Builds a filter from `datafile`, else `blacklist`, else the bundled list.
    #[new]
    #[pyo3(signature = (blacklist=None, datafile=None))]
    fn new(blacklist: Option<Vec<String>>, datafile: Option<PathBuf>) -> PyResult<Self> {
        let config = FilterConfig {
            blacklist,
            datafile,
            engine: Engine::default(),
        };
        Ok(Self {
            inner: Wordfilter::from_config(&config)?,
        })
    }

    fn blacklisted(&self, text: &str) -> bool {
        self.inner.blacklisted(text)
    }

    /// Scans a str, dict, list or tuple, descending into nested containers.
    fn blacklisted_any(&self, value: &Bound<'_, PyAny>) -> PyResult<bool> {
        scan_any(&self.inner, value)
    }

    fn add_words(&mut self, words: &Bound<'_, PyAny>) -> PyResult<()> {
        Ok(self.inner.add_words(word_input(words)?)?)
    }

    fn remove_words(&mut self, words: &Bound<'_, PyAny>) -> PyResult<()> {
        Ok(self.inner.remove_words(word_input(words)?)?)
    }

    fn clear_list(&mut self) {
        self.inner.clear_list();
    }

    #[getter]
    fn blacklist(&self) -> Vec<String> {
        sorted(&self.inner)
    }
}

// Module functions drain Python iterables before taking the default filter's
// lock, so a generator may itself call back into the module.

#[gen_stub_pyfunction]
#[pyfunction(name = "blacklisted")]
fn py_blacklisted(text: &str) -> bool {
    default_filter::blacklisted(text)
}

#[gen_stub_pyfunction]
#[pyfunction(name = "add_words")]
fn py_add_words(words: &Bound<'_, PyAny>) -> PyResult<()> {
    let entries = word_input(words)?.into_entries()?;
    Ok(default_filter::add_words(entries)?)
}

#[gen_stub_pyfunction]
#[pyfunction(name = "remove_words")]
fn py_remove_words(words: &Bound<'_, PyAny>) -> PyResult<()> {
    let entries = word_input(words)?.into_entries()?;
    Ok(default_filter::remove_words(entries)?)
}

#[gen_stub_pyfunction]
#[pyfunction(name = "clear_list")]
fn py_clear_list() {
    default_filter::clear_list();
}

#[pymodule]
/// python module compose
/// # Errors
/// * methods not found
pub fn wordfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWordfilter>()?;
    m.add_function(wrap_pyfunction!(py_blacklisted, m)?)?;
    m.add_function(wrap_pyfunction!(py_add_words, m)?)?;
    m.add_function(wrap_pyfunction!(py_remove_words, m)?)?;
    m.add_function(wrap_pyfunction!(py_clear_list, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
