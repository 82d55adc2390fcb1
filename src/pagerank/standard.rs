//! Standard PageRank algorithm
//!
//! Implements weighted PageRank with power iteration and proper
//! handling of dangling nodes.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Each node passes `damping` of its score to its neighbours in
    /// proportion to edge weight. Dangling nodes spread their mass uniformly
    /// and every node gets the `(1 - damping) / n` teleport share, so no node
    /// ever scores zero.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        // Stops once the L1 change is at most `threshold`, not `n * threshold`
        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 1.0);
        builder.increment_edge(2, 0, 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub (node 0) connected to 3 spokes
        let mut builder = GraphBuilder::with_nodes(4);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(0, 2, 1.0);
        builder.increment_edge(0, 3, 1.0);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = StandardPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = StandardPageRank::new().run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&build_star_graph());

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_heavier_edge_attracts_more_score() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 0.9);
        builder.increment_edge(0, 2, 0.1);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_isolated_node_gets_floor_score() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.increment_edge(0, 1, 1.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.converged);
        assert!(result.scores[2] > 0.0);
        assert!(result.scores[2] < result.scores[0]);
        assert!((result.scores[0] - result.scores[1]).abs() < 1e-9);
    }

    #[test]
    fn test_edgeless_graph_is_uniform() {
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(4));
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_node() {
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(1));
        let result = StandardPageRank::new().run(&graph);

        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
        assert!(result.scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_zero_threshold_stops_on_exact_fixed_point() {
        // Uniform scores are already stationary on an edgeless graph
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(4));
        let result = StandardPageRank::new().with_threshold(0.0).run(&graph);

        assert_eq!(result.iterations, 1);
        assert_eq!(result.delta, 0.0);
        assert!(result.converged);
    }

    #[test]
    fn test_threshold_not_scaled_by_node_count() {
        let graph = build_star_graph();
        let threshold = 1e-4;
        let result = StandardPageRank::new().with_threshold(threshold).run(&graph);

        assert!(result.converged);
        assert!(result.delta <= threshold);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        // With higher damping, hub advantage should be more pronounced
        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }
}
