//! Pairwise sentence similarity matrix
//!
//! Every sentence is vectorised once; each unordered pair is then scored
//! once and mirrored, so the matrix is exactly symmetric. Rows of the upper
//! triangle are computed in parallel and written back by position, which
//! keeps the result independent of thread scheduling.

use super::term_vector::TermVector;
use crate::nlp::stopwords::StopwordSet;
use crate::types::Sentence;
use rayon::prelude::*;

/// A dense N×N similarity matrix with a zero diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of sentences
    size: usize,
    /// Row-major weights
    weights: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            weights: vec![0.0; size * size],
        }
    }

    /// Build the matrix for a slice of sentences
    pub fn build(sentences: &[Sentence], stopwords: &StopwordSet) -> Self {
        let vectors: Vec<TermVector> = sentences
            .par_iter()
            .map(|s| TermVector::from_sentence(s, stopwords))
            .collect();

        Self::from_vectors(&vectors)
    }

    /// Build the matrix from precomputed term vectors
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        let size = vectors.len();

        // Upper triangle rows: row i holds similarities to j in (i+1)..n
        let upper: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                vectors[i + 1..]
                    .iter()
                    .map(|other| vectors[i].cosine_similarity(other))
                    .collect()
            })
            .collect();

        let mut matrix = Self::zeros(size);
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, similarity) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                matrix.weights[i * size + j] = similarity;
                matrix.weights[j * size + i] = similarity;
            }
        }
        matrix
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Weight at `(i, j)`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.weights[i * self.size + j]
    }

    /// Row `i` as a slice
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) panics, so an empty matrix yields nothing
        self.weights.chunks(self.size.max(1))
    }

    /// Iterate over nonzero entries `(i, j, weight)` with `i < j`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size).filter_map(move |j| {
                let weight = self.weights[i * self.size + j];
                (weight > 0.0).then_some((i, j, weight))
            })
        })
    }

    /// Check the matrix is exactly symmetric
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Vec<Sentence>, StopwordSet) {
        let sentences = vec![
            Sentence::from_text("the cat sat on the mat"),
            Sentence::from_text("a cat sat on a rug"),
            Sentence::from_text("dogs bark loudly"),
        ];
        (sentences, StopwordSet::from_list(["the", "on", "a"]))
    }

    #[test]
    fn test_build_scenario() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        assert_eq!(matrix.size(), 3);
        assert!((matrix.get(0, 1) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(matrix.get(0, 2), 0.0);
        assert_eq!(matrix.get(1, 2), 0.0);
    }

    #[test]
    fn test_diagonal_is_zero() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_duplicate_sentences_score_one() {
        let sentences = vec![
            Sentence::from_text("the cat sat"),
            Sentence::from_text("The Cat Sat"),
        ];
        let matrix = SimilarityMatrix::build(&sentences, &StopwordSet::from_list(["the"]));

        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_edges_skip_zero_weights() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        let edges: Vec<_> = matrix.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].0, edges[0].1), (0, 1));
    }

    #[test]
    fn test_rows() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        assert_eq!(matrix.rows().count(), 3);
        assert_eq!(matrix.row(2), &[0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bounds_panics() {
        let (sentences, stopwords) = scenario();
        let matrix = SimilarityMatrix::build(&sentences, &stopwords);

        let _ = matrix.row(3);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = SimilarityMatrix::build(&[], &StopwordSet::empty());
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);

        let single = SimilarityMatrix::build(
            &[Sentence::from_text("alone here")],
            &StopwordSet::empty(),
        );
        assert_eq!(single.size(), 1);
        assert_eq!(single.get(0, 0), 0.0);
    }
}
