use std::error;
use std::fmt;

/// Errors raised while generating a contact graph.
///
/// Every variant corresponds to a generator parameter outside its allowed
/// range; generation either succeeds completely or leaves the graph empty
/// with its topology label unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphError {
    /// A probability parameter was outside [0, 1].
    InvalidProbability(&'static str, f64),

    /// A graph cannot be built over zero nodes.
    EmptyGraph,

    /// Barabasi-Albert: more seed nodes requested than nodes exist.
    SeedCountExceedsNodes { m0: usize, n: usize },

    /// Barabasi-Albert: each new node must attach to at most m0 seeds.
    AttachmentExceedsSeeds { m: usize, m0: usize },

    /// Watts-Strogatz: the ring degree k must exceed ln(N).
    DegreeBelowLogN { k: usize, n: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(name, value) => {
                write!(f, "Probability '{name}' must be in [0, 1], got {value}")
            }
            Self::EmptyGraph => write!(f, "Graph must contain at least one node"),
            Self::SeedCountExceedsNodes { m0, n } => {
                write!(f, "Seed count m0 = {m0} exceeds node count {n}")
            }
            Self::AttachmentExceedsSeeds { m, m0 } => {
                write!(f, "Attachment count m = {m} must not exceed m0 = {m0}")
            }
            Self::DegreeBelowLogN { k, n } => {
                write!(f, "Ring degree k = {k} must exceed ln({n})")
            }
        }
    }
}

impl error::Error for GraphError {}

/// Errors raised by the epidemic engine.
///
/// `GraphNotBuilt` and `WeightsStale` flag inconsistent engine state (weights
/// requested before a topology exists, or a tick attempted after a rebuild
/// invalidated the weights); the remaining variants are parameter errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EpidemicError {
    /// A probability parameter was outside [0, 1].
    InvalidProbability(&'static str, f64),

    /// The weight range was empty or not finite.
    InvalidWeightRange { low: f64, high: f64 },

    /// More initial infections requested than individuals exist.
    SeedExceedsPopulation { n0: usize, n: usize },

    /// Weights or a tick were requested before any topology was generated.
    GraphNotBuilt,

    /// The builder was finalized without a population size.
    MissingPopulationSize,

    /// The graph was regenerated after the last weight assignment; the
    /// stored weights no longer align with the adjacency lists.
    WeightsStale,

    /// A graph generation failure, surfaced through `select_topology`.
    Graph(GraphError),
}

impl fmt::Display for EpidemicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(name, value) => {
                write!(f, "Probability '{name}' must be in [0, 1], got {value}")
            }
            Self::InvalidWeightRange { low, high } => {
                write!(f, "Invalid weight range [{low}, {high}]")
            }
            Self::SeedExceedsPopulation { n0, n } => {
                write!(f, "Cannot seed {n0} infections in a population of {n}")
            }
            Self::GraphNotBuilt => {
                write!(f, "No topology has been generated for this engine")
            }
            Self::MissingPopulationSize => {
                write!(f, "Population size is required")
            }
            Self::WeightsStale => {
                write!(f, "Edge weights are missing or stale; call set_weights after selecting a topology")
            }
            Self::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for EpidemicError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GraphError> for EpidemicError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_display() {
        let err = GraphError::InvalidProbability("p", 1.5);
        assert_eq!(format!("{err}"), "Probability 'p' must be in [0, 1], got 1.5");

        let err = GraphError::AttachmentExceedsSeeds { m: 5, m0: 3 };
        assert!(format!("{err}").contains("m = 5"));
    }

    #[test]
    fn test_epidemic_error_from_graph_error() {
        let err: EpidemicError = GraphError::EmptyGraph.into();
        assert_eq!(err, EpidemicError::Graph(GraphError::EmptyGraph));
        assert!(format!("{err}").contains("at least one node"));
    }
}
