//! Infection-tree branching process.
//!
//! A standalone, graph-free variant of the epidemic model: a single patient
//! zero spawns new infections directly, each recorded in a who-infected-whom
//! tree. Parent links are non-owning id back-references and child links are
//! owned id lists, so the tree is navigable in both directions without
//! cyclic ownership. The disease course (symptom onset, recovery window,
//! age-scaled death probability) matches the main engine's aging rules.

use crate::epidemic::{
    Lethality, Patient, Status, RECOVERY_AGE, SYMPTOM_ONSET_AGE, SYMPTOM_ONSET_PROB,
};
use crate::errors::EpidemicError;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Branching-process outbreak starting from one infected patient.
#[derive(Debug, Clone)]
pub struct OutbreakTree {
    /// Per-contact infection probability per tick.
    pi: f64,
    /// Recovery probability per tick once past the recovery age.
    pr: f64,
    /// Death-probability scale: a patient infected for the whole horizon
    /// approaches `pd = 1 / factor`.
    factor: f64,
    rng: Xoshiro256PlusPlus,
}

impl OutbreakTree {
    /// Create an outbreak process. `factor` stretches the age-scaled death
    /// probability `pd = time / (factor * horizon)`.
    pub fn new(pi: f64, pr: f64, factor: f64, seed: Option<u64>) -> Result<Self, EpidemicError> {
        if !(0.0..=1.0).contains(&pi) {
            return Err(EpidemicError::InvalidProbability("pi", pi));
        }
        if !(0.0..=1.0).contains(&pr) {
            return Err(EpidemicError::InvalidProbability("pr", pr));
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(EpidemicError::InvalidProbability("factor", factor));
        }

        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        Ok(Self { pi, pr, factor, rng })
    }

    /// Simulate `horizon` ticks from a single patient zero and return the
    /// full patient map, indexed by id.
    ///
    /// Per tick: every infected patient ages (death probability grows
    /// linearly with disease age, symptom onset as in the main engine); each
    /// non-symptomatic infected patient spawns one new infection with
    /// probability `pi`, recording the parent/child links; recovery and
    /// death rounds then run against the aged state. Newly spawned patients
    /// join the population at the end of the tick.
    pub fn run(&mut self, horizon: u32) -> Vec<Patient> {
        let lethality = Lethality::AgeScaled {
            rate: 1.0 / (self.factor * f64::from(horizon.max(1))),
        };

        let mut patients = vec![Patient::new(0)];
        patients[0].set_infected(None);

        for _ in 0..horizon {
            // Aging round.
            for patient in &mut patients {
                patient.advance_real_time();
                if patient.status() != Status::Infected {
                    continue;
                }
                patient.advance_disease_age();
                patient.set_death_probability(lethality.probability(patient.time()));
                if patient.time() >= SYMPTOM_ONSET_AGE
                    && !patient.has_symptoms()
                    && self.rng.random::<f64>() < SYMPTOM_ONSET_PROB
                {
                    patient.set_symptoms();
                }
            }

            // Infection round: spawned patients are collected and appended
            // after the remaining rounds, as the snapshot semantics require.
            let mut spawned = Vec::new();
            for id in 0..patients.len() {
                if patients[id].is_infectious() && self.rng.random::<f64>() < self.pi {
                    let child_id = patients.len() + spawned.len();
                    let mut child = Patient::new(child_id);
                    child.set_infected(Some(id));
                    patients[id].record_infection_of(child_id);
                    spawned.push(child);
                }
            }

            // Recovery round.
            for patient in &mut patients {
                if patient.status() == Status::Infected
                    && patient.time() > RECOVERY_AGE
                    && self.rng.random::<f64>() < self.pr
                {
                    patient.set_recovered();
                }
            }

            // Death round.
            for patient in &mut patients {
                if patient.status() == Status::Infected
                    && patient.has_symptoms()
                    && self.rng.random::<f64>() < patient.death_probability()
                {
                    patient.set_deceased();
                }
            }

            patients.append(&mut spawned);
        }

        patients
    }
}
