//! Erdos-Renyi random graph generation.

use crate::network::Graph;
use rand::Rng;

/// Populate `graph` with an Erdos-Renyi random topology.
///
/// Every ordered pair (i, j) with i != j receives its own independent
/// Bernoulli(p) trial. In symmetric mode a successful trial inserts both
/// directions, so the symmetric graph is denser than one built from a single
/// trial per unordered pair (n * (n - 1) trials are still drawn).
///
/// The caller validates `p` and clears the graph beforehand.
pub(crate) fn generate<R: Rng + ?Sized>(graph: &mut Graph, p: f64, symmetric: bool, rng: &mut R) {
    let n = graph.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if rng.random::<f64>() < p {
                graph.add_edge(i, j);
                if symmetric {
                    graph.add_edge(j, i);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::TopologyModel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_er_symmetric_mirrors_every_edge() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = Graph::build(
            TopologyModel::ErdosRenyi { p: 0.3, symmetric: true },
            50,
            &mut rng,
        )
        .unwrap();

        for i in 0..graph.len() {
            for &j in graph.neighbors(i) {
                assert!(graph.contains_edge(j, i), "edge {j} -> {i} missing");
            }
        }
    }

    #[test]
    fn test_er_no_self_loops_or_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = Graph::build(
            TopologyModel::ErdosRenyi { p: 0.8, symmetric: false },
            30,
            &mut rng,
        )
        .unwrap();

        for i in 0..graph.len() {
            let neighbors = graph.neighbors(i);
            assert!(!neighbors.contains(&i), "self-loop at {i}");
            let mut sorted = neighbors.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), neighbors.len(), "duplicate edge at {i}");
        }
    }

    #[test]
    fn test_er_extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = Graph::build(
            TopologyModel::ErdosRenyi { p: 0.0, symmetric: false },
            10,
            &mut rng,
        )
        .unwrap();
        assert_eq!(empty.edge_count(), 0);

        let full = Graph::build(
            TopologyModel::ErdosRenyi { p: 1.0, symmetric: false },
            10,
            &mut rng,
        )
        .unwrap();
        assert_eq!(full.edge_count(), 10 * 9);
    }

    #[test]
    fn test_er_asymmetric_density_near_p() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 200;
        let graph = Graph::build(
            TopologyModel::ErdosRenyi { p: 0.5, symmetric: false },
            n,
            &mut rng,
        )
        .unwrap();

        let expected = (n * (n - 1)) as f64 * 0.5;
        let observed = graph.edge_count() as f64;
        assert!(
            (observed - expected).abs() < expected * 0.05,
            "edge count {observed} far from expectation {expected}"
        );
    }
}
