//! Sentence similarity
//!
//! Bag-of-words term vectors and the pairwise similarity matrix that the
//! ranking graph is built from.

pub mod matrix;
pub mod term_vector;

pub use matrix::SimilarityMatrix;
pub use term_vector::TermVector;
