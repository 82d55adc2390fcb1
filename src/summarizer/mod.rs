//! Extractive summarization
//!
//! Builds the similarity matrix, ranks sentences by centrality and selects
//! the top-K. The returned [`Summary`] owns no state beyond the call; callers
//! keep it in their own context if they need it later.

pub mod document;
pub mod ranker;
pub mod selector;

use crate::errors::{Result, SummaryError};
use crate::nlp::stopwords::StopwordSet;
use crate::similarity::SimilarityMatrix;
use crate::types::{Sentence, SummarizerConfig};
use ranker::{Ranking, SentenceRanker};

/// Result of a summarization call
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    /// Selected sentences in rank order
    pub sentences: Vec<&'a Sentence>,
    /// The full ranking the selection was taken from
    pub ranking: Ranking<'a>,
}

impl<'a> Summary<'a> {
    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if no sentences were selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentences rendered as space-joined tokens, in rank order
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.joined()).collect()
    }

    /// Selected sentences re-ordered by input position
    pub fn in_document_order(&self) -> Vec<&'a Sentence> {
        let mut selected: Vec<_> = self.ranking.top_n(self.sentences.len()).to_vec();
        selected.sort_by_key(|r| r.index);
        selected.into_iter().map(|r| r.sentence).collect()
    }
}

/// Summarizer bound to a validated configuration
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    ranker: SentenceRanker,
}

impl Summarizer {
    /// Create a summarizer, validating the config
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let ranker = SentenceRanker::from_config(&config);
        Ok(Self { config, ranker })
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `sentences`, returning the top `config.top_n` in rank order
    pub fn summarize<'a>(
        &self,
        sentences: &'a [Sentence],
        stopwords: &StopwordSet,
    ) -> Result<Summary<'a>> {
        if sentences.is_empty() {
            return Err(SummaryError::empty_input("no sentences to summarize"));
        }
        if self.config.top_n > sentences.len() {
            return Err(SummaryError::out_of_range(
                self.config.top_n,
                sentences.len(),
            ));
        }

        let matrix = SimilarityMatrix::build(sentences, stopwords);
        let ranking = self.ranker.rank(sentences, &matrix)?;
        let selected = selector::select(&ranking, self.config.top_n)?;

        Ok(Summary {
            sentences: selected,
            ranking,
        })
    }
}

/// Summarize `sentences` with the given stopwords and config
pub fn summarize<'a>(
    sentences: &'a [Sentence],
    stopwords: &StopwordSet,
    config: &SummarizerConfig,
) -> Result<Summary<'a>> {
    Summarizer::new(config.clone())?.summarize(sentences, stopwords)
}
