//! Barabasi-Albert preferential-attachment graph generation.

use crate::network::Graph;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Populate `graph` with a Barabasi-Albert scale-free topology.
///
/// `m0` distinct seed nodes are drawn uniformly and each seed is wired
/// symmetrically to one other random seed. The remaining nodes are attached
/// one at a time (reverse order of the pending list): each new node samples
/// candidates from the current seed set with replacement and accepts a
/// candidate with probability degree(candidate) / degree_sum(seed set),
/// where the normalization is fixed at the start of that node's attachment
/// round. Already-connected candidates are rejected. Once exactly `m`
/// symmetric edges are attached the node joins the seed set.
///
/// The caller validates `2 <= m0 <= n` and `m <= m0` and clears the graph
/// beforehand.
pub(crate) fn generate<R: Rng + ?Sized>(graph: &mut Graph, m: usize, m0: usize, rng: &mut R) {
    let n = graph.len();
    let mut seed_nodes = rand::seq::index::sample(rng, n, m0).into_vec();
    let mut pending: Vec<usize> = (0..n).filter(|node| !seed_nodes.contains(node)).collect();

    // Initial wiring: every seed gets one partner among the other seeds.
    for idx in 0..seed_nodes.len() {
        let node = seed_nodes[idx];
        let mut partner = *seed_nodes.choose(rng).unwrap();
        while partner == node {
            partner = *seed_nodes.choose(rng).unwrap();
        }
        graph.add_edge_symmetric(node, partner);
    }

    while let Some(new_node) = pending.pop() {
        let norm = graph.degree_sum(&seed_nodes) as f64;
        let mut attached = 0;

        while attached < m {
            let candidate = *seed_nodes.choose(rng).unwrap();
            if graph.contains_edge(new_node, candidate) {
                continue;
            }
            let acceptance = graph.degree(candidate) as f64 / norm;
            if rng.random::<f64>() < acceptance {
                graph.add_edge_symmetric(new_node, candidate);
                attached += 1;
            }
        }

        seed_nodes.push(new_node);
    }
}
