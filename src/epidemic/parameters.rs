//! Epidemic parameters and configuration.
//!
//! All disease-course thresholds live here as named constants so the model
//! variants differ only in explicit configuration, never in magic numbers
//! buried in the engine.

use crate::errors::EpidemicError;
use serde::{Deserialize, Serialize};

/// Disease age (ticks since infection) at which the symptom-onset check
/// starts firing. The check is `time >= SYMPTOM_ONSET_AGE`.
pub const SYMPTOM_ONSET_AGE: u32 = 4;

/// Probability that an eligible infected patient develops symptoms on a
/// given tick.
pub const SYMPTOM_ONSET_PROB: f64 = 0.5;

/// Disease age beyond which recovery becomes possible. The check is
/// `time > RECOVERY_AGE`.
pub const RECOVERY_AGE: u32 = 7;

/// How a patient's death probability evolves with disease age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Lethality {
    /// Every symptomatic patient faces the same per-tick death probability.
    Fixed(f64),
    /// Death probability grows linearly with disease age:
    /// `pd = rate * time`, capped at 1.0.
    AgeScaled { rate: f64 },
}

impl Lethality {
    /// Death probability for a patient of the given disease age.
    pub fn probability(&self, time: u32) -> f64 {
        match *self {
            Self::Fixed(pd) => pd,
            Self::AgeScaled { rate } => (rate * f64::from(time)).min(1.0),
        }
    }

    fn validate(&self) -> Result<(), EpidemicError> {
        match *self {
            Self::Fixed(pd) => {
                if !(0.0..=1.0).contains(&pd) {
                    return Err(EpidemicError::InvalidProbability("pd", pd));
                }
            }
            Self::AgeScaled { rate } => {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(EpidemicError::InvalidProbability("rate", rate));
                }
            }
        }
        Ok(())
    }
}

/// Parameters governing the per-tick state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpidemicParams {
    /// Per-tick recovery probability once the disease age exceeds
    /// [`RECOVERY_AGE`].
    pub pr: f64,
    /// Death-probability model for symptomatic patients.
    pub lethality: Lethality,
    /// Gain of the saturating response `phy(x) = gamma * x / (1 + x)`.
    pub gamma: f64,
    /// Interaction-score contribution of a recovered neighbor: -1.0 models
    /// recovered contacts displacing infectious contact time (shielding),
    /// 0.0 makes them inert.
    pub recovered_weight: f64,
}

impl EpidemicParams {
    /// Create parameters with a fixed per-population death probability,
    /// default gain and shielding recovered contacts.
    pub fn new(pr: f64, pd: f64) -> Result<Self, EpidemicError> {
        Self::with_lethality(pr, Lethality::Fixed(pd))
    }

    /// Create parameters with an explicit lethality model.
    pub fn with_lethality(pr: f64, lethality: Lethality) -> Result<Self, EpidemicError> {
        let params = Self {
            pr,
            lethality,
            gamma: 1.0,
            recovered_weight: -1.0,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate all probability fields.
    pub fn validate(&self) -> Result<(), EpidemicError> {
        if !(0.0..=1.0).contains(&self.pr) {
            return Err(EpidemicError::InvalidProbability("pr", self.pr));
        }
        self.lethality.validate()?;
        if !self.gamma.is_finite() {
            return Err(EpidemicError::InvalidProbability("gamma", self.gamma));
        }
        if !self.recovered_weight.is_finite() {
            return Err(EpidemicError::InvalidProbability(
                "recovered_weight",
                self.recovered_weight,
            ));
        }
        Ok(())
    }

    /// Saturating response mapping a raw interaction score to an infection
    /// probability in [0, 1) for positive `gamma <= 1`. Non-positive scores
    /// map to exactly 0: negative neighborhood pressure must never infect,
    /// and the raw ratio would flip positive again below -1.
    pub fn phy(&self, score: f64) -> f64 {
        if score <= 0.0 {
            return 0.0;
        }
        self.gamma * score / (1.0 + score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new_defaults() {
        let params = EpidemicParams::new(0.3, 0.1).unwrap();
        assert_eq!(params.pr, 0.3);
        assert_eq!(params.lethality, Lethality::Fixed(0.1));
        assert_eq!(params.gamma, 1.0);
        assert_eq!(params.recovered_weight, -1.0);
    }

    #[test]
    fn test_params_reject_out_of_range_probabilities() {
        assert_eq!(
            EpidemicParams::new(1.5, 0.1).unwrap_err(),
            EpidemicError::InvalidProbability("pr", 1.5)
        );
        assert_eq!(
            EpidemicParams::new(0.3, -0.1).unwrap_err(),
            EpidemicError::InvalidProbability("pd", -0.1)
        );
        assert_eq!(
            EpidemicParams::with_lethality(0.3, Lethality::AgeScaled { rate: -1.0 }).unwrap_err(),
            EpidemicError::InvalidProbability("rate", -1.0)
        );
    }

    #[test]
    fn test_lethality_probability() {
        assert_eq!(Lethality::Fixed(0.2).probability(100), 0.2);

        let scaled = Lethality::AgeScaled { rate: 0.05 };
        assert_eq!(scaled.probability(0), 0.0);
        assert_eq!(scaled.probability(10), 0.5);
        // Capped at certainty for very old infections.
        assert_eq!(scaled.probability(1000), 1.0);
    }

    #[test]
    fn test_phy_saturates() {
        let params = EpidemicParams::new(0.3, 0.1).unwrap();
        assert_eq!(params.phy(0.0), 0.0);
        assert!(params.phy(1.0) == 0.5);
        assert!(params.phy(100.0) < 1.0);

        // Monotone over the achievable score range.
        let mut last = f64::MIN;
        for i in 0..100 {
            let value = params.phy(f64::from(i) * 0.1);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_phy_zero_for_negative_scores() {
        // Weights above 1 make scores below -1 reachable, where the raw
        // ratio gamma * x / (1 + x) turns positive again; the response must
        // stay at zero across the whole non-positive range.
        let params = EpidemicParams::new(0.3, 0.1).unwrap();
        assert_eq!(params.phy(-0.5), 0.0);
        assert_eq!(params.phy(-1.0), 0.0);
        assert_eq!(params.phy(-2.0), 0.0);
        assert_eq!(params.phy(-100.0), 0.0);
    }
}
