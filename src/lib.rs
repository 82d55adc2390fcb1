//! # sentence_rank
//!
//! Extractive summarization with TextRank.
//!
//! Sentences are compared pairwise by bag-of-words cosine similarity, the
//! resulting similarity graph is ranked with PageRank, and the most central
//! sentences are returned in rank order.
//!
//! ## Features
//!
//! - **Deterministic**: identical inputs always produce identical rankings
//! - **Parallel**: the O(N²) similarity matrix is built with rayon
//! - **Typed failures**: empty input and oversized `top_n` are errors, not panics
//! - **Python bindings**: optional PyO3 module behind the `python` feature
//!
//! ```
//! use sentence_rank::{summarize, Sentence, StopwordSet, SummarizerConfig};
//!
//! let sentences = vec![
//!     Sentence::from_text("the cat sat on the mat"),
//!     Sentence::from_text("a cat sat on a rug"),
//!     Sentence::from_text("dogs bark loudly"),
//! ];
//! let stopwords = StopwordSet::from_list(["the", "on", "a"]);
//! let config = SummarizerConfig::default().with_top_n(2);
//!
//! let summary = summarize(&sentences, &stopwords, &config)?;
//! assert_eq!(summary.texts(), vec!["the cat sat on the mat", "a cat sat on a rug"]);
//! # Ok::<(), sentence_rank::SummaryError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{LeadSentencePolicy, RankedSentence, Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{
    stopwords::StopwordSet,
    tokenizer::{clean_paragraph, Tokenizer},
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use similarity::{term_vector::sentence_similarity, SimilarityMatrix, TermVector};
pub use summarizer::{
    document::{summarize_batch_json, summarize_json, SummaryRequest, SummaryResponse},
    ranker::{Ranking, SentenceRanker},
    selector::select,
    summarize, Summarizer, Summary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
