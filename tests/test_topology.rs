//! Integration tests for the contact-graph generators: structural
//! properties of each topology model and the rebuild contract.

use epinet::errors::GraphError;
use epinet::network::{Graph, TopologyModel};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn is_symmetric(graph: &Graph) -> bool {
    (0..graph.len()).all(|i| {
        graph
            .neighbors(i)
            .iter()
            .all(|&j| graph.contains_edge(j, i))
    })
}

#[test]
fn test_er_symmetric_property_across_sizes() {
    for (seed, n) in [(1_u64, 5_usize), (2, 25), (3, 80)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::build(
            TopologyModel::ErdosRenyi { p: 0.4, symmetric: true },
            n,
            &mut rng,
        )
        .unwrap();
        assert!(is_symmetric(&graph), "asymmetry at n = {n}");
    }
}

#[test]
fn test_ba_every_node_reaches_attachment_count() {
    let mut rng = StdRng::seed_from_u64(42);
    for (m, m0, n) in [(1_usize, 2_usize, 30_usize), (2, 3, 50), (3, 6, 80)] {
        let graph = Graph::build(TopologyModel::BarabasiAlbert { m, m0 }, n, &mut rng).unwrap();
        for node in 0..n {
            assert!(
                graph.degree(node) >= m,
                "node {node} below m = {m} in ({m}, {m0}, {n})"
            );
        }
        assert!(is_symmetric(&graph));
    }
}

#[test]
fn test_ba_graph_is_connected() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = Graph::build(TopologyModel::BarabasiAlbert { m: 2, m0: 4 }, 100, &mut rng)
        .unwrap();

    let mut visited = vec![false; graph.len()];
    let mut stack = vec![0_usize];
    visited[0] = true;
    while let Some(node) = stack.pop() {
        for &next in graph.neighbors(node) {
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }
    assert!(visited.iter().all(|&seen| seen));
}

#[test]
fn test_ba_rebuild_fully_clears_small_graph() {
    // m = 2, m0 = 2, N = 5: each build is exactly 7 undirected edges.
    let mut rng = StdRng::seed_from_u64(5);
    let model = TopologyModel::BarabasiAlbert { m: 2, m0: 2 };
    let mut graph = Graph::build(model, 5, &mut rng).unwrap();
    assert_eq!(graph.edge_count(), 14);

    graph.generate(model, &mut rng).unwrap();
    assert_eq!(graph.edge_count(), 14, "leftover edges from the first build");
}

#[test]
fn test_ws_beta_zero_is_deterministic_lattice() {
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(999);
    let model = TopologyModel::WattsStrogatz { k: 6, beta: 0.0 };

    // Without rewiring the build consumes no randomness that matters: any
    // two builds agree exactly.
    let a = Graph::build(model, 40, &mut rng_a).unwrap();
    let b = Graph::build(model, 40, &mut rng_b).unwrap();
    for node in 0..40 {
        assert_eq!(a.neighbors(node), b.neighbors(node));
    }
    assert_eq!(a.edge_count(), 40 * 6);
}

#[test]
fn test_ws_beta_one_conserves_edge_count() {
    let mut rng = StdRng::seed_from_u64(77);
    let before = Graph::build(TopologyModel::WattsStrogatz { k: 8, beta: 0.0 }, 60, &mut rng)
        .unwrap()
        .edge_count();
    let after = Graph::build(TopologyModel::WattsStrogatz { k: 8, beta: 1.0 }, 60, &mut rng)
        .unwrap()
        .edge_count();
    assert_eq!(before, after);
}

#[test]
fn test_invalid_parameters_surface_synchronously() {
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(
        Graph::build(TopologyModel::ErdosRenyi { p: -0.1, symmetric: false }, 10, &mut rng)
            .unwrap_err(),
        GraphError::InvalidProbability("p", -0.1)
    );
    assert_eq!(
        Graph::build(TopologyModel::BarabasiAlbert { m: 4, m0: 3 }, 10, &mut rng).unwrap_err(),
        GraphError::AttachmentExceedsSeeds { m: 4, m0: 3 }
    );
    assert_eq!(
        Graph::build(TopologyModel::WattsStrogatz { k: 2, beta: 0.5 }, 100, &mut rng)
            .unwrap_err(),
        GraphError::DegreeBelowLogN { k: 2, n: 100 }
    );
    assert_eq!(
        Graph::build(TopologyModel::WattsStrogatz { k: 6, beta: 1.2 }, 100, &mut rng)
            .unwrap_err(),
        GraphError::InvalidProbability("beta", 1.2)
    );
}

#[test]
fn test_topology_label_follows_last_successful_build() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut graph = Graph::new(20).unwrap();
    assert_eq!(graph.topology_label(), "none");

    graph
        .generate(TopologyModel::ErdosRenyi { p: 0.3, symmetric: true }, &mut rng)
        .unwrap();
    assert_eq!(graph.topology_label(), "er");

    graph
        .generate(TopologyModel::BarabasiAlbert { m: 2, m0: 3 }, &mut rng)
        .unwrap();
    assert_eq!(graph.topology_label(), "ba");

    // A failed build keeps the previous label.
    assert!(graph
        .generate(TopologyModel::WattsStrogatz { k: 1, beta: 0.5 }, &mut rng)
        .is_err());
    assert_eq!(graph.topology_label(), "ba");
}
