//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use epinet::prelude::*;
//!
//! let mut engine = EpidemicBuilder::new()
//!     .population_size(50)
//!     .recovery_probability(0.3)
//!     .death_probability(0.1)
//!     .topology(TopologyModel::ErdosRenyi { p: 0.2, symmetric: true })
//!     .weight_range(0.0, 1.0)
//!     .initial_infected(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = engine.advance().unwrap();
//! assert_eq!(engine.counts().total(), 50);
//! assert!(report.infected.len() <= 50);
//! ```

pub use crate::epidemic::{
    Epidemic, EpidemicBuilder, EpidemicParams, Lethality, OutbreakTree, Patient, Status,
    StatusCounts, TickReport,
};
pub use crate::errors::{EpidemicError, GraphError};
pub use crate::network::{Graph, TopologyModel};
