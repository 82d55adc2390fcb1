//! JSON interface for batch processing
//!
//! Passes whole request documents across the boundary in one call.

use crate::summarizer::document;
use pyo3::prelude::*;

/// Summarize a JSON request document and return the JSON response
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_from_json(json_input: &str) -> PyResult<String> {
    document::summarize_json(json_input)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Summarize a JSON array of request documents
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(json_input: &str) -> PyResult<String> {
    document::summarize_batch_json(json_input)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
