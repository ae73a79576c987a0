//! Epidemic state transitions and the simulation engine.
//!
//! The most commonly used types are re-exported here for convenience:
//!
//! - [`Epidemic`]: the engine that owns graph, weights and patients and
//!   advances the population tick by tick.
//! - [`EpidemicBuilder`]: fluent builder for constructing engines with
//!   sensible defaults and validation.
//! - [`EpidemicParams`] / [`Lethality`]: transition configuration.
//! - [`OutbreakTree`]: the standalone branching-process variant.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod patient;
pub mod tree;

pub use builder::EpidemicBuilder;
pub use engine::{Epidemic, StatusCounts, TickReport};
pub use parameters::{
    EpidemicParams, Lethality, RECOVERY_AGE, SYMPTOM_ONSET_AGE, SYMPTOM_ONSET_PROB,
};
pub use patient::{Patient, Status};
pub use tree::OutbreakTree;
