//! Python bindings via PyO3
//!
//! This module provides the Python interface for sentence_rank.

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface
    m.add_class::<native::PyRankedSentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;

    // JSON interface
    m.add_function(wrap_pyfunction!(json::summarize_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::summarize_batch_from_json, m)?)?;

    Ok(())
}
