//! Native Python interface
//!
//! Direct Python classes for callers that already hold their sentences as
//! Python strings.

use crate::errors::SummaryError;
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::Tokenizer;
use crate::summarizer::Summarizer;
use crate::types::{LeadSentencePolicy, SummarizerConfig};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: SummaryError) -> PyErr {
    match err {
        SummaryError::OutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// A sentence selected by the summarizer
#[pyclass(name = "RankedSentence")]
#[derive(Clone)]
pub struct PyRankedSentence {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub rank: usize,
}

#[pymethods]
impl PyRankedSentence {
    fn __repr__(&self) -> String {
        format!(
            "RankedSentence(index={}, score={:.4}, rank={})",
            self.index, self.score, self.rank
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

/// Result of summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub sentences: Vec<PyRankedSentence>,
    #[pyo3(get)]
    pub converged: bool,
    #[pyo3(get)]
    pub iterations: usize,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, converged={}, iterations={})",
            self.sentences.len(),
            self.converged,
            self.iterations
        )
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PyRankedSentence> {
        self.sentences
            .get(idx)
            .cloned()
            .ok_or_else(|| PyIndexError::new_err("index out of range"))
    }

    /// Selected sentence texts in rank order
    fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }

    /// Selected sentence texts in document order
    fn texts_in_document_order(&self) -> Vec<String> {
        let mut ordered = self.sentences.clone();
        ordered.sort_by_key(|s| s.index);
        ordered.into_iter().map(|s| s.text).collect()
    }
}

/// Summarize pre-segmented sentences
///
/// `lead_score=None` ranks the first sentence by centrality like the rest.
#[pyfunction]
#[pyo3(signature = (
    sentences,
    stopwords=None,
    top_n=3,
    damping=0.85,
    max_iterations=100,
    tolerance=1e-6,
    lead_score=Some(1.0)
))]
pub fn summarize(
    sentences: Vec<String>,
    stopwords: Option<Vec<String>>,
    top_n: usize,
    damping: f64,
    max_iterations: usize,
    tolerance: f64,
    lead_score: Option<f64>,
) -> PyResult<PySummary> {
    let lead_policy = match lead_score {
        Some(score) => LeadSentencePolicy::FixedScore(score),
        None => LeadSentencePolicy::Centrality,
    };
    let config = SummarizerConfig::new()
        .with_top_n(top_n)
        .with_damping(damping)
        .with_max_iterations(max_iterations)
        .with_tolerance(tolerance)
        .with_lead_policy(lead_policy);
    let summarizer = Summarizer::new(config).map_err(to_py_err)?;

    let sentences = Tokenizer::new().tokenize_all(&sentences);
    let stopwords = StopwordSet::from_list(stopwords.unwrap_or_default());
    let summary = summarizer
        .summarize(&sentences, &stopwords)
        .map_err(to_py_err)?;

    let ranked = summary
        .ranking
        .top_n(summary.len())
        .iter()
        .enumerate()
        .map(|(rank, r)| PyRankedSentence {
            text: r.sentence.joined(),
            index: r.index,
            score: r.score,
            rank: rank + 1,
        })
        .collect();

    Ok(PySummary {
        sentences: ranked,
        converged: summary.ranking.converged(),
        iterations: summary.ranking.iterations(),
    })
}
