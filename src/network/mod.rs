//! Contact graph generation.
//!
//! This module provides the adjacency-list [`Graph`] and the topology
//! generators that populate it: Erdos-Renyi random graphs, Barabasi-Albert
//! preferential attachment and Watts-Strogatz small worlds. Generators are
//! selected through [`TopologyModel`] and draw from a caller-supplied
//! random source so builds are reproducible under a seeded RNG.

pub mod graph;

mod barabasi_albert;
mod erdos_renyi;
mod watts_strogatz;

pub use graph::{Graph, TopologyModel};
