//! Epinet: discrete-time SIRD epidemic simulation over contact networks.
//!
//! This library provides data structures and algorithms for modeling disease
//! spread (Susceptible-Infected-Recovered-Deceased) over a population graph:
//! contact-network generators (Erdos-Renyi, Barabasi-Albert, Watts-Strogatz)
//! and a per-tick epidemic engine driven by weighted neighbor interactions.
//!
//! CLI parsing, plotting and result persistence are deliberately out of
//! scope; callers drive the engine and read its transition reports.

pub mod epidemic;
pub mod errors;
pub mod network;
pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when building or driving simulations. Re-exporting them
// here makes them available as `epinet::Epidemic`, `epinet::Graph`, etc.
pub use epidemic::{Epidemic, EpidemicBuilder, Status};
pub use network::{Graph, TopologyModel};
