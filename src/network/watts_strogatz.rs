//! Watts-Strogatz small-world graph generation.

use crate::network::Graph;
use rand::Rng;

/// Populate `graph` with a Watts-Strogatz small-world topology.
///
/// First a ring lattice is built: every node is connected symmetrically to
/// its `k / 2` nearest neighbors on each side (indices wrap modulo N, odd
/// `k` rounds down to the nearest even degree). Each undirected lattice
/// edge, recorded once through its forward half-edge (i, i + d), is then
/// marked for rewiring with probability `beta`. A marked edge is removed in
/// both directions and its first endpoint reattached to a uniform random
/// target that is neither the endpoint itself nor already adjacent to it; if
/// no such target exists the edge is kept. Edge count is conserved either
/// way.
///
/// The caller validates `k > ln(N)` and `beta` and clears the graph
/// beforehand.
pub(crate) fn generate<R: Rng + ?Sized>(graph: &mut Graph, k: usize, beta: f64, rng: &mut R) {
    let n = graph.len();
    let half = k / 2;

    for node in 0..n {
        for offset in 1..=half {
            let target = (node + offset) % n;
            if target != node {
                graph.add_edge_symmetric(node, target);
            }
        }
    }

    // Mark first, rewire second: the marking pass sees the pristine lattice.
    let mut marked = Vec::new();
    for node in 0..n {
        for offset in 1..=half {
            let target = (node + offset) % n;
            if target != node && rng.random::<f64>() < beta {
                marked.push((node, target));
            }
        }
    }

    for (node, old_target) in marked {
        if !graph.contains_edge(node, old_target) {
            // Lattice wrap-around can record the same undirected edge twice
            // on small rings; the second mark then refers to a removed edge.
            continue;
        }
        // All other nodes already adjacent: nowhere to rewire to.
        if graph.degree(node) >= n - 1 {
            continue;
        }
        let mut new_target = rng.random_range(0..n);
        while new_target == node || graph.contains_edge(node, new_target) {
            new_target = rng.random_range(0..n);
        }
        graph.remove_edge_symmetric(node, old_target);
        graph.add_edge_symmetric(node, new_target);
    }
}
