//! Sentence ranking by graph centrality
//!
//! Turns a similarity matrix into a graph, runs PageRank over it and
//! orders the sentences by score.

use crate::errors::{Result, SummaryError};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::similarity::SimilarityMatrix;
use crate::types::{LeadSentencePolicy, RankedSentence, Sentence, SummarizerConfig};

/// Sentences in rank order, with the solver's diagnostics
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Ranked sentences, descending score, ties by input position
    pub ranked: Vec<RankedSentence<'a>>,
    /// Raw PageRank output, indexed by input position
    pub pagerank: PageRankResult,
}

impl<'a> Ranking<'a> {
    /// Number of ranked sentences
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Check if nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The first `n` ranked sentences (fewer if `n` exceeds the ranking)
    pub fn top_n(&self, n: usize) -> &[RankedSentence<'a>] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Ranking score of the sentence at input position `index`
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.ranked
            .iter()
            .find(|r| r.index == index)
            .map(|r| r.score)
    }

    /// Centralities scaled so that they sum to the sentence count
    pub fn scaled_centrality(&self) -> Vec<f64> {
        let n = self.pagerank.scores.len() as f64;
        self.pagerank.scores.iter().map(|s| s * n).collect()
    }

    /// Whether power iteration reached the tolerance
    pub fn converged(&self) -> bool {
        self.pagerank.converged
    }

    /// Number of power iterations performed
    pub fn iterations(&self) -> usize {
        self.pagerank.iterations
    }
}

/// Ranks sentences by PageRank over their similarity graph
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    pagerank: StandardPageRank,
    lead_policy: LeadSentencePolicy,
}

impl SentenceRanker {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.tolerance),
            lead_policy: config.lead_policy,
        }
    }

    /// Set the lead sentence policy
    pub fn with_lead_policy(mut self, policy: LeadSentencePolicy) -> Self {
        self.lead_policy = policy;
        self
    }

    /// Rank `sentences` given their pairwise similarity matrix
    pub fn rank<'a>(
        &self,
        sentences: &'a [Sentence],
        matrix: &SimilarityMatrix,
    ) -> Result<Ranking<'a>> {
        if sentences.is_empty() {
            return Err(SummaryError::empty_input("no sentences to rank"));
        }
        if sentences.len() != matrix.size() {
            return Err(SummaryError::dimension_mismatch(
                sentences.len(),
                matrix.size(),
            ));
        }

        let graph = CsrGraph::from_builder(&GraphBuilder::from_matrix(matrix));
        let pagerank = self.pagerank.run(&graph);

        let mut ranked: Vec<RankedSentence<'a>> = sentences
            .iter()
            .zip(pagerank.scores.iter())
            .enumerate()
            .map(|(index, (sentence, &centrality))| RankedSentence {
                score: self.lead_policy.apply(index, centrality),
                centrality,
                index,
                sentence,
            })
            .collect();
        ranked.sort_by(RankedSentence::rank_cmp);

        Ok(Ranking { ranked, pagerank })
    }
}
