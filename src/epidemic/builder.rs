//! Builder pattern for creating epidemic engines.
//!
//! Provides a fluent API for configuring and creating engines with sensible
//! defaults and validation at `build` time.

use crate::epidemic::{Epidemic, EpidemicParams, Lethality};
use crate::errors::EpidemicError;
use crate::network::TopologyModel;

/// Builder for constructing [`Epidemic`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use epinet::epidemic::EpidemicBuilder;
/// use epinet::network::TopologyModel;
///
/// let engine = EpidemicBuilder::new()
///     .population_size(100)
///     .recovery_probability(0.3)
///     .death_probability(0.1)
///     .topology(TopologyModel::ErdosRenyi { p: 0.2, symmetric: true })
///     .weight_range(0.0, 1.0)
///     .initial_infected(3)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.counts().infected, 3);
/// ```
#[derive(Debug, Clone)]
pub struct EpidemicBuilder {
    // Required
    population_size: Option<usize>,

    // Transition parameters (with defaults)
    pr: f64,                // Default: 0.0 (no recovery)
    lethality: Lethality,   // Default: Fixed(0.0) (no death)
    gamma: f64,             // Default: 1.0
    recovered_weight: f64,  // Default: -1.0 (shielding)

    // Setup steps applied by build()
    topology: Option<TopologyModel>,
    weight_range: Option<(f64, f64)>,
    initial_infected: Option<usize>,
    seed: Option<u64>, // Default: None (entropy)
}

impl Default for EpidemicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EpidemicBuilder {
    /// Create a builder with all defaults.
    pub fn new() -> Self {
        Self {
            population_size: None,
            pr: 0.0,
            lethality: Lethality::Fixed(0.0),
            gamma: 1.0,
            recovered_weight: -1.0,
            topology: None,
            weight_range: None,
            initial_infected: None,
            seed: None,
        }
    }

    /// Number of individuals in the population (required).
    pub fn population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    /// Per-tick recovery probability.
    pub fn recovery_probability(mut self, pr: f64) -> Self {
        self.pr = pr;
        self
    }

    /// Fixed per-tick death probability for symptomatic patients.
    pub fn death_probability(mut self, pd: f64) -> Self {
        self.lethality = Lethality::Fixed(pd);
        self
    }

    /// Explicit lethality model (fixed or age-scaled).
    pub fn lethality(mut self, lethality: Lethality) -> Self {
        self.lethality = lethality;
        self
    }

    /// Gain of the saturating infection response.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Interaction-score contribution of recovered neighbors.
    pub fn recovered_weight(mut self, weight: f64) -> Self {
        self.recovered_weight = weight;
        self
    }

    /// Topology to generate before the engine is returned.
    pub fn topology(mut self, model: TopologyModel) -> Self {
        self.topology = Some(model);
        self
    }

    /// Weight range assigned after topology generation.
    pub fn weight_range(mut self, low: f64, high: f64) -> Self {
        self.weight_range = Some((low, high));
        self
    }

    /// Number of initially infected individuals.
    pub fn initial_infected(mut self, n0: usize) -> Self {
        self.initial_infected = Some(n0);
        self
    }

    /// RNG seed for a reproducible simulation.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and construct the engine, generating the
    /// topology, assigning weights and seeding infections when configured.
    pub fn build(self) -> Result<Epidemic, EpidemicError> {
        let n = self
            .population_size
            .ok_or(EpidemicError::MissingPopulationSize)?;

        let params = EpidemicParams {
            pr: self.pr,
            lethality: self.lethality,
            gamma: self.gamma,
            recovered_weight: self.recovered_weight,
        };

        let mut engine = Epidemic::with_params(n, params, self.seed)?;
        if let Some(model) = self.topology {
            engine.select_topology(model)?;
        }
        if let Some((low, high)) = self.weight_range {
            engine.set_weights(low, high)?;
        }
        if let Some(n0) = self.initial_infected {
            engine.seed_infection(n0)?;
        }
        Ok(engine)
    }
}
