//! Core types for sentence_rank
//!
//! This module defines the fundamental data structures used throughout the library:
//! sentences, ranked sentences and the summarizer configuration.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
///
/// A sentence is identified by its position in the slice handed to the
/// summarizer; it carries no index of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text as supplied by the caller
    pub text: String,
    /// Word tokens in order of appearance (case preserved)
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a sentence from pre-split tokens
    ///
    /// The text is reconstructed by joining the tokens with single spaces.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        Self {
            text: tokens.join(" "),
            tokens,
        }
    }

    /// Create a sentence by splitting text on whitespace
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(str::to_string).collect();
        Self { text, tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with single spaces
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

// ============================================================================
// Ranked Sentence
// ============================================================================

/// A sentence paired with its ranking score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedSentence<'a> {
    /// Score used for ordering (centrality, or the lead-sentence override)
    pub score: f64,
    /// Raw stationary-distribution centrality of the node
    pub centrality: f64,
    /// Position of the sentence in the input
    pub index: usize,
    /// The ranked sentence
    pub sentence: &'a Sentence,
}

impl RankedSentence<'_> {
    /// Ordering: descending score, ties broken by ascending input position
    pub fn rank_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

// ============================================================================
// Lead Sentence Policy
// ============================================================================

/// How the first sentence of the input is scored
///
/// The reference behaviour pins the opening sentence to a fixed score of
/// `1.0`. Centralities form a distribution summing to one, so with the
/// default policy the first sentence always leads the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSentencePolicy {
    /// Rank the first sentence by its centrality like any other
    Centrality,
    /// Replace the first sentence's score with a fixed value
    FixedScore(f64),
}

impl Default for LeadSentencePolicy {
    fn default() -> Self {
        Self::FixedScore(1.0)
    }
}

impl LeadSentencePolicy {
    /// Score to rank the sentence at `index` by, given its centrality
    pub fn apply(&self, index: usize, centrality: f64) -> f64 {
        match self {
            Self::FixedScore(score) if index == 0 => *score,
            _ => centrality,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Number of sentences to return
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Damping factor for PageRank (typically 0.85)
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Convergence tolerance (stop when the L1 delta <= tolerance)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Scoring rule for the first sentence
    #[serde(default)]
    pub lead_policy: LeadSentencePolicy,
}

fn default_top_n() -> usize {
    3
}

fn default_damping() -> f64 {
    0.85
}

fn default_max_iterations() -> usize {
    100
}

fn default_tolerance() -> f64 {
    1e-6
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            lead_policy: LeadSentencePolicy::default(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(SummaryError::invalid_config("top_n must be > 0"));
        }

        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SummaryError::invalid_config(format!(
                "tolerance must be a finite value >= 0, got {}",
                self.tolerance
            )));
        }

        if let LeadSentencePolicy::FixedScore(score) = self.lead_policy {
            if !score.is_finite() {
                return Err(SummaryError::invalid_config(
                    "lead sentence score must be finite",
                ));
            }
        }

        Ok(())
    }

    /// Builder method: set number of sentences to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: set the lead sentence policy
    pub fn with_lead_policy(mut self, policy: LeadSentencePolicy) -> Self {
        self.lead_policy = policy;
        self
    }
}
