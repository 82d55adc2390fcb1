//! Sparse bag-of-words vectors for sentences
//!
//! A sentence's vector counts each lowercased, non-stopword token once per
//! occurrence. Dimensions that would be zero are not stored, so cosine
//! similarity over the sparse form equals cosine similarity over the dense
//! vectors of the two sentences' shared vocabulary.

use crate::nlp::stopwords::StopwordSet;
use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// A sparse term-count vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: lowercased term -> occurrence count
    pub counts: FxHashMap<String, u32>,
    /// L2 norm of the vector
    pub norm: f64,
}

impl TermVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the count vector for a sentence, skipping stopwords
    pub fn from_sentence(sentence: &Sentence, stopwords: &StopwordSet) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();

        for token in &sentence.tokens {
            let term = token.to_lowercase();
            if stopwords.contains_lowercase(&term) {
                continue;
            }
            *counts.entry(term).or_insert(0) += 1;
        }

        Self::from_counts(counts)
    }

    /// Create from a map of counts
    pub fn from_counts(counts: FxHashMap<String, u32>) -> Self {
        let norm = Self::compute_norm(&counts);
        Self { counts, norm }
    }

    /// Compute L2 norm
    fn compute_norm(counts: &FxHashMap<String, u32>) -> f64 {
        counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &TermVector) -> f64 {
        // Iterate the smaller map, probe the larger
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(term, &count)| {
                large
                    .counts
                    .get(term)
                    .map(|&other_count| f64::from(count) * f64::from(other_count))
            })
            .sum()
    }

    /// Cosine similarity with another vector
    ///
    /// Zero vectors (every token was a stopword, or the sentence was empty)
    /// have similarity `0.0` with everything.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        let similarity = self.dot(other) / (self.norm * other.norm);
        // Rounding can push identical vectors a hair past 1
        similarity.clamp(0.0, 1.0)
    }

    /// Check if the vector is the zero vector
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Similarity of two sentences under the given stopword set
pub fn sentence_similarity(a: &Sentence, b: &Sentence, stopwords: &StopwordSet) -> f64 {
    let va = TermVector::from_sentence(a, stopwords);
    let vb = TermVector::from_sentence(b, stopwords);
    va.cosine_similarity(&vb)
}
