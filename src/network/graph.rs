//! Contact graph over a fixed set of nodes.
//!
//! The graph is an arena of adjacency lists indexed by integer node id, so
//! neighbor lookups are direct vector indexing rather than hash lookups.
//! Every node id in `0..len` is always present, even when isolated.

use crate::errors::GraphError;
use crate::network::{barabasi_albert, erdos_renyi, watts_strogatz};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Topology model used to generate a contact graph.
///
/// Carries the full parameter set of the generator so a graph's provenance
/// can be recorded and the same topology regenerated elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TopologyModel {
    /// Erdos-Renyi random graph: each ordered pair (i, j), i != j, receives
    /// an independent Bernoulli(p) trial. In symmetric mode every successful
    /// trial also inserts the mirrored edge.
    ErdosRenyi { p: f64, symmetric: bool },
    /// Barabasi-Albert preferential attachment: `m0` random seed nodes, each
    /// later node attaches `m` symmetric edges with degree-proportional
    /// acceptance sampling.
    BarabasiAlbert { m: usize, m0: usize },
    /// Watts-Strogatz small world: ring lattice of degree `k` (`k/2`
    /// neighbors per side), each undirected lattice edge rewired with
    /// probability `beta`.
    WattsStrogatz { k: usize, beta: f64 },
}

impl TopologyModel {
    /// Short label for this model, as recorded on generated graphs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ErdosRenyi { .. } => "er",
            Self::BarabasiAlbert { .. } => "ba",
            Self::WattsStrogatz { .. } => "ws",
        }
    }

    /// Validate the model parameters against a graph of `n` nodes.
    fn validate(&self, n: usize) -> Result<(), GraphError> {
        match *self {
            Self::ErdosRenyi { p, .. } => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(GraphError::InvalidProbability("p", p));
                }
            }
            Self::BarabasiAlbert { m, m0 } => {
                // m0 >= 2 so seed wiring can avoid self-pairing.
                if m0 < 2 || m0 > n {
                    return Err(GraphError::SeedCountExceedsNodes { m0, n });
                }
                if m > m0 {
                    return Err(GraphError::AttachmentExceedsSeeds { m, m0 });
                }
            }
            Self::WattsStrogatz { k, beta } => {
                if !(0.0..=1.0).contains(&beta) {
                    return Err(GraphError::InvalidProbability("beta", beta));
                }
                if (k as f64) <= (n as f64).ln() {
                    return Err(GraphError::DegreeBelowLogN { k, n });
                }
            }
        }
        Ok(())
    }
}

/// An adjacency-list contact graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Neighbor lists, indexed by node id.
    adjacency: Vec<Vec<usize>>,
    /// The model that last populated this graph, `None` while empty.
    topology: Option<TopologyModel>,
}

impl Graph {
    /// Create a graph of `n` isolated nodes.
    pub fn new(n: usize) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            adjacency: vec![Vec::new(); n],
            topology: None,
        })
    }

    /// Build a graph of `n` nodes under the given topology model.
    pub fn build<R: Rng + ?Sized>(
        model: TopologyModel,
        n: usize,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n)?;
        graph.generate(model, rng)?;
        Ok(graph)
    }

    /// Regenerate this graph under `model`.
    ///
    /// Generation is a full rebuild: all existing adjacency lists are
    /// cleared before the generator runs. Parameters are validated first, so
    /// a failed call leaves the previous edges untouched. The topology label
    /// is updated only after the generator succeeds.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        model: TopologyModel,
        rng: &mut R,
    ) -> Result<(), GraphError> {
        model.validate(self.len())?;
        self.clear();

        match model {
            TopologyModel::ErdosRenyi { p, symmetric } => {
                erdos_renyi::generate(self, p, symmetric, rng);
            }
            TopologyModel::BarabasiAlbert { m, m0 } => {
                barabasi_albert::generate(self, m, m0, rng);
            }
            TopologyModel::WattsStrogatz { k, beta } => {
                watts_strogatz::generate(self, k, beta, rng);
            }
        }

        self.topology = Some(model);
        Ok(())
    }

    /// Remove every edge, leaving all nodes isolated and the label unset.
    fn clear(&mut self) {
        for neighbors in &mut self.adjacency {
            neighbors.clear();
        }
        self.topology = None;
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// A graph always has at least one node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The model that last populated this graph, if any.
    pub fn topology(&self) -> Option<TopologyModel> {
        self.topology
    }

    /// Topology label: `"none"`, `"er"`, `"ba"` or `"ws"`.
    pub fn topology_label(&self) -> &'static str {
        self.topology.map_or("none", |model| model.label())
    }

    /// Neighbor list of `node`, in insertion order.
    ///
    /// # Panics
    /// Panics if `node` is not a valid node id.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Degree (out-degree for asymmetric graphs) of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a valid node id.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Summed degree over a set of nodes.
    pub fn degree_sum(&self, nodes: &[usize]) -> usize {
        nodes.iter().map(|&node| self.degree(node)).sum()
    }

    /// Total number of directed adjacency entries.
    ///
    /// Symmetric generators store both directions, so their undirected edge
    /// count is half this value.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether the directed edge `from -> to` is present.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency[from].contains(&to)
    }

    /// Insert the directed edge `from -> to`, ignoring duplicates.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        if !self.adjacency[from].contains(&to) {
            self.adjacency[from].push(to);
        }
    }

    /// Insert both directions of an undirected edge, ignoring duplicates.
    pub(crate) fn add_edge_symmetric(&mut self, a: usize, b: usize) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Remove both directions of an undirected edge, if present.
    pub(crate) fn remove_edge_symmetric(&mut self, a: usize, b: usize) {
        self.adjacency[a].retain(|&node| node != b);
        self.adjacency[b].retain(|&node| node != a);
    }
}
