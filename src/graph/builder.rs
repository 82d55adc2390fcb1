//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) edge lookups during construction. Nodes are sentence positions.

use crate::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable undirected graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Node storage, indexed by node ID
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with `count` unconnected nodes
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); count],
        }
    }

    /// Increment the edge weight between two nodes
    ///
    /// If the edge doesn't exist, it's created with the given weight.
    /// If it exists, the weight is added to the existing weight.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        // Add edge in both directions (undirected graph)
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build the sentence graph for a similarity matrix
    ///
    /// One node per sentence; an edge for every nonzero off-diagonal weight.
    /// Sentences with no similar neighbour stay as isolated nodes.
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let mut builder = Self::with_nodes(matrix.size());
        for (i, j, weight) in matrix.edges() {
            builder.increment_edge(i as u32, j as u32, weight);
        }
        builder
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (i as u32, n))
    }

    /// Get edge weight between two nodes
    pub fn get_edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        self.nodes
            .get(from as usize)
            .and_then(|n| n.edges.get(&to).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordSet;
    use crate::types::Sentence;

    #[test]
    fn test_increment_edge() {
        let mut builder = GraphBuilder::with_nodes(2);

        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(0, 1, 0.5);

        assert_eq!(builder.get_edge_weight(0, 1), Some(1.5));
        assert_eq!(builder.get_edge_weight(1, 0), Some(1.5)); // Undirected
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_no_self_loops() {
        let mut builder = GraphBuilder::with_nodes(1);

        builder.increment_edge(0, 0, 1.0);

        assert_eq!(builder.get_edge_weight(0, 0), None);
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_from_matrix() {
        let sentences = vec![
            Sentence::from_text("the cat sat on the mat"),
            Sentence::from_text("a cat sat on a rug"),
            Sentence::from_text("dogs bark loudly"),
        ];
        let matrix =
            SimilarityMatrix::build(&sentences, &StopwordSet::from_list(["the", "on", "a"]));
        let builder = GraphBuilder::from_matrix(&matrix);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
        assert!(builder.get_edge_weight(0, 1).is_some());
        assert!(builder.get_node(2).is_some_and(|n| n.edges.is_empty()));
    }

    #[test]
    fn test_empty_builder() {
        let builder = GraphBuilder::from_matrix(&SimilarityMatrix::zeros(0));
        assert!(builder.is_empty());
    }
}
