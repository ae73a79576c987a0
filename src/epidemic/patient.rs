//! Per-individual epidemic state.

use serde::{Deserialize, Serialize};

/// Health state of one individual.
///
/// `Susceptible` is the initial state. The only transitions are
/// S -> I (infection), I -> R (recovery) and I -> D (death); `Recovered`
/// and `Deceased` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Susceptible,
    Infected,
    Recovered,
    Deceased,
}

impl Status {
    /// Contribution of a neighbor in this state to a susceptible node's
    /// interaction score.
    ///
    /// Infected neighbors push the score up; recovered neighbors contribute
    /// `recovered_weight` (-1.0 shields, 0.0 is neutral); susceptible and
    /// deceased neighbors contribute nothing.
    pub fn contribution(self, recovered_weight: f64) -> f64 {
        match self {
            Self::Susceptible | Self::Deceased => 0.0,
            Self::Infected => 1.0,
            Self::Recovered => recovered_weight,
        }
    }

    /// Whether this is a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Recovered | Self::Deceased)
    }
}

/// One simulated individual.
///
/// The record persists for the whole simulation: recovered and deceased
/// patients keep their history but stop taking part in state transitions.
/// `infected_by` is a non-owning back-reference by node id; `infects` is the
/// owned forward list of ids this patient infected, populated only by the
/// branching-process variant in [`crate::epidemic::tree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    id: usize,
    status: Status,
    infected_by: Option<usize>,
    infects: Vec<usize>,
    /// Ticks since this patient became infected.
    time: u32,
    /// Ticks since the simulation started.
    real_time: u32,
    symptoms: bool,
    /// Death-probability accumulator, maintained by the engine's lethality
    /// configuration during the aging phase.
    pd: f64,
}

impl Patient {
    /// Create a susceptible patient with a fresh history.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            status: Status::Susceptible,
            infected_by: None,
            infects: Vec::new(),
            time: 0,
            real_time: 0,
            symptoms: false,
            pd: 0.0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn infected_by(&self) -> Option<usize> {
        self.infected_by
    }

    /// Ids this patient infected, in infection order.
    pub fn infects(&self) -> &[usize] {
        &self.infects
    }

    /// Ticks since infection.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Ticks since simulation start.
    pub fn real_time(&self) -> u32 {
        self.real_time
    }

    pub fn has_symptoms(&self) -> bool {
        self.symptoms
    }

    /// Current death probability.
    pub fn death_probability(&self) -> f64 {
        self.pd
    }

    /// Whether this patient currently adds infection pressure on neighbors.
    /// Symptomatic individuals isolate and stop infecting.
    pub fn is_infectious(&self) -> bool {
        self.status == Status::Infected && !self.symptoms
    }

    pub(crate) fn set_infected(&mut self, infected_by: Option<usize>) {
        self.status = Status::Infected;
        self.infected_by = infected_by;
    }

    pub(crate) fn set_recovered(&mut self) {
        self.status = Status::Recovered;
        self.symptoms = false;
    }

    pub(crate) fn set_deceased(&mut self) {
        self.status = Status::Deceased;
    }

    pub(crate) fn set_symptoms(&mut self) {
        self.symptoms = true;
    }

    pub(crate) fn set_death_probability(&mut self, pd: f64) {
        self.pd = pd;
    }

    pub(crate) fn record_infection_of(&mut self, id: usize) {
        self.infects.push(id);
    }

    pub(crate) fn advance_disease_age(&mut self) {
        self.time += 1;
    }

    pub(crate) fn advance_real_time(&mut self) {
        self.real_time += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_new_is_susceptible() {
        let patient = Patient::new(3);
        assert_eq!(patient.id(), 3);
        assert_eq!(patient.status(), Status::Susceptible);
        assert_eq!(patient.infected_by(), None);
        assert!(patient.infects().is_empty());
        assert_eq!(patient.time(), 0);
        assert_eq!(patient.real_time(), 0);
        assert!(!patient.has_symptoms());
        assert_eq!(patient.death_probability(), 0.0);
    }

    #[test]
    fn test_status_contribution() {
        assert_eq!(Status::Susceptible.contribution(-1.0), 0.0);
        assert_eq!(Status::Infected.contribution(-1.0), 1.0);
        assert_eq!(Status::Recovered.contribution(-1.0), -1.0);
        assert_eq!(Status::Recovered.contribution(0.0), 0.0);
        assert_eq!(Status::Deceased.contribution(-1.0), 0.0);
    }

    #[test]
    fn test_infectiousness_gated_by_symptoms() {
        let mut patient = Patient::new(0);
        assert!(!patient.is_infectious());

        patient.set_infected(None);
        assert!(patient.is_infectious());

        patient.set_symptoms();
        assert!(!patient.is_infectious());
    }

    #[test]
    fn test_recovery_clears_symptoms() {
        let mut patient = Patient::new(0);
        patient.set_infected(Some(7));
        patient.set_symptoms();
        patient.set_recovered();

        assert_eq!(patient.status(), Status::Recovered);
        assert!(!patient.has_symptoms());
        assert_eq!(patient.infected_by(), Some(7));
        assert!(patient.status().is_terminal());
    }
}
