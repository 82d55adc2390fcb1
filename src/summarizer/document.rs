//! JSON request/response interface
//!
//! Lets non-Rust callers hand over raw sentence strings, a stopword list and
//! an optional config in one JSON document and get the ranked selection
//! back as JSON.

use super::Summarizer;
use crate::errors::Result;
use crate::nlp::stopwords::StopwordSet;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::SummarizerConfig;
use serde::{Deserialize, Serialize};

/// Input document
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    /// Pre-segmented sentences, tokenized on whitespace
    pub sentences: Vec<String>,
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

/// One selected sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub text: String,
    pub index: usize,
    pub score: f64,
    pub rank: usize,
}

/// Output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Selected sentences in rank order
    pub sentences: Vec<SelectedSentence>,
    pub converged: bool,
    pub iterations: usize,
}

impl SummaryRequest {
    /// Run the request
    pub fn run(&self) -> Result<SummaryResponse> {
        let config = self.config.clone().unwrap_or_default();
        let summarizer = Summarizer::new(config)?;

        let sentences = Tokenizer::new().tokenize_all(&self.sentences);
        let stopwords = StopwordSet::from_list(&self.stopwords);
        let summary = summarizer.summarize(&sentences, &stopwords)?;

        let selected = summary
            .ranking
            .top_n(summary.len())
            .iter()
            .enumerate()
            .map(|(rank, r)| SelectedSentence {
                text: r.sentence.joined(),
                index: r.index,
                score: r.score,
                rank: rank + 1,
            })
            .collect();

        Ok(SummaryResponse {
            sentences: selected,
            converged: summary.ranking.converged(),
            iterations: summary.ranking.iterations(),
        })
    }
}

/// Summarize a JSON request document, returning a JSON response
pub fn summarize_json(input: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(input)?;
    let response = request.run()?;
    Ok(serde_json::to_string(&response)?)
}

/// Summarize a JSON array of request documents
///
/// Fails on the first document that fails.
pub fn summarize_batch_json(input: &str) -> Result<String> {
    let requests: Vec<SummaryRequest> = serde_json::from_str(input)?;
    let responses = requests
        .iter()
        .map(SummaryRequest::run)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&responses)?)
}
