//! Epidemic engine.
//!
//! This module provides the main simulation loop: the [`Epidemic`] engine
//! owns the contact graph, the per-edge interaction weights, the patient
//! records and its own random source, and advances the whole population by
//! one synchronous tick per [`Epidemic::advance`] call.

use crate::epidemic::{
    EpidemicParams, Patient, Status, RECOVERY_AGE, SYMPTOM_ONSET_AGE, SYMPTOM_ONSET_PROB,
};
use crate::errors::EpidemicError;
use crate::network::{Graph, TopologyModel};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// State transitions produced by a single tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Nodes that became infected this tick.
    pub infected: Vec<usize>,
    /// Nodes that recovered this tick.
    pub recovered: Vec<usize>,
    /// Nodes that died this tick.
    pub deceased: Vec<usize>,
}

/// Population totals per status. Always sums to the population size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    pub deceased: usize,
}

impl StatusCounts {
    /// Total number of individuals counted.
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered + self.deceased
    }
}

/// Discrete-time SIRD epidemic over a contact graph.
///
/// The engine exclusively owns its graph, weight table, patient records and
/// random source, so concurrent simulations are isolated by construction:
/// every instance is fully independent and reproducible from its seed.
#[derive(Debug, Clone)]
pub struct Epidemic {
    /// Contact graph over the population.
    graph: Graph,
    /// Per-edge interaction weights, positionally aligned with the graph's
    /// neighbor lists.
    weights: Vec<Vec<f64>>,
    /// Cleared whenever the graph is rebuilt; weights must be reassigned.
    weights_valid: bool,
    /// One record per node id.
    patients: Vec<Patient>,
    /// Transition parameters.
    params: EpidemicParams,
    /// Ticks advanced so far.
    tick: u32,
    /// Random number generator (Xoshiro256++, seeded for reproducibility)
    rng: Xoshiro256PlusPlus,
}

impl Epidemic {
    /// Create an engine over `n` individuals with recovery probability `pr`
    /// and fixed death probability `pd`. The random source is seeded from
    /// entropy; use [`crate::epidemic::EpidemicBuilder`] for a reproducible
    /// seed or a non-default lethality model.
    pub fn new(n: usize, pr: f64, pd: f64) -> Result<Self, EpidemicError> {
        let params = EpidemicParams::new(pr, pd)?;
        Self::with_params(n, params, None)
    }

    /// Create an engine with explicit parameters and an optional RNG seed.
    pub fn with_params(
        n: usize,
        params: EpidemicParams,
        seed: Option<u64>,
    ) -> Result<Self, EpidemicError> {
        params.validate()?;
        let graph = Graph::new(n)?;

        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        Ok(Self {
            graph,
            weights: vec![Vec::new(); n],
            weights_valid: false,
            patients: (0..n).map(Patient::new).collect(),
            params,
            tick: 0,
            rng,
        })
    }

    /// Regenerate the contact graph under `model`.
    ///
    /// Any previously assigned weights are invalidated: they would no longer
    /// align with the new adjacency lists, and using them anyway is a
    /// correctness bug the engine refuses to commit.
    pub fn select_topology(&mut self, model: TopologyModel) -> Result<(), EpidemicError> {
        self.graph.generate(model, &mut self.rng)?;
        self.weights_valid = false;
        Ok(())
    }

    /// Assign one uniform weight in `[low, high]` per directed adjacency
    /// entry, positionally aligned with the neighbor lists.
    ///
    /// Requires a built topology; must be called again after every rebuild.
    pub fn set_weights(&mut self, low: f64, high: f64) -> Result<(), EpidemicError> {
        if self.graph.topology().is_none() {
            return Err(EpidemicError::GraphNotBuilt);
        }
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(EpidemicError::InvalidWeightRange { low, high });
        }

        for node in 0..self.graph.len() {
            let degree = self.graph.degree(node);
            let weights = &mut self.weights[node];
            weights.clear();
            weights.reserve(degree);
            for _ in 0..degree {
                weights.push(self.rng.random_range(low..=high));
            }
        }
        self.weights_valid = true;
        Ok(())
    }

    /// Set `n0` distinct, uniformly chosen individuals to `Infected`.
    /// Returns the chosen node ids.
    pub fn seed_infection(&mut self, n0: usize) -> Result<Vec<usize>, EpidemicError> {
        let n = self.population_size();
        if n0 > n {
            return Err(EpidemicError::SeedExceedsPopulation { n0, n });
        }

        let chosen = rand::seq::index::sample(&mut self.rng, n, n0).into_vec();
        for &id in &chosen {
            self.patients[id].set_infected(None);
        }
        Ok(chosen)
    }

    /// Advance the whole population by one tick.
    ///
    /// Four ordered phases, each evaluated against the state left by the
    /// previous one: aging (disease-age counters, symptom onset), infection
    /// scoring, recovery, death. Infection, recovery and death decisions are
    /// collected as marks and applied only after all phases have run, in the
    /// fixed order recovery, infection, death; a death mark therefore
    /// overrides a same-tick recovery mark and the patient is reported as
    /// deceased only. Preconditions are checked before the first phase, so a
    /// failed call leaves the engine untouched.
    pub fn advance(&mut self) -> Result<TickReport, EpidemicError> {
        if self.graph.topology().is_none() {
            return Err(EpidemicError::GraphNotBuilt);
        }
        if !self.weights_valid {
            return Err(EpidemicError::WeightsStale);
        }

        self.age_population();
        let infected = self.infection_marks();
        let recovered = self.recovery_marks();
        let deceased = self.death_marks();

        for &id in &recovered {
            self.patients[id].set_recovered();
        }
        for &id in &infected {
            self.patients[id].set_infected(None);
        }
        for &id in &deceased {
            self.patients[id].set_deceased();
        }

        self.tick += 1;

        let recovered = recovered
            .into_iter()
            .filter(|id| !deceased.contains(id))
            .collect();
        Ok(TickReport {
            infected,
            recovered,
            deceased,
        })
    }

    /// Phase 1: every patient's real-time counter advances; infected
    /// patients age, update their death probability and may develop
    /// symptoms once the onset age is reached.
    fn age_population(&mut self) {
        let lethality = self.params.lethality;
        for patient in &mut self.patients {
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
    }

    /// Phase 2: score every susceptible node against its non-symptomatic
    /// neighbors and draw for infection.
    fn infection_marks(&mut self) -> Vec<usize> {
        let mut marks = Vec::new();
        for id in 0..self.patients.len() {
            if self.patients[id].status() != Status::Susceptible {
                continue;
            }
            let score = self.interaction_score(id);
            if self.rng.random::<f64>() < self.params.phy(score) {
                marks.push(id);
            }
        }
        marks
    }

    /// Weighted average of neighbor status contributions, gated on
    /// symptoms: symptomatic neighbors isolate and contribute nothing.
    /// Isolated nodes score 0, so they can never be infected.
    fn interaction_score(&self, id: usize) -> f64 {
        let neighbors = self.graph.neighbors(id);
        if neighbors.is_empty() {
            return 0.0;
        }

        let mut score = 0.0;
        for (slot, &neighbor) in neighbors.iter().enumerate() {
            let contact = &self.patients[neighbor];
            if contact.has_symptoms() {
                continue;
            }
            score += self.weights[id][slot]
                * contact.status().contribution(self.params.recovered_weight);
        }
        score / neighbors.len() as f64
    }

    /// Phase 3: infected patients past the recovery age draw against `pr`.
    fn recovery_marks(&mut self) -> Vec<usize> {
        let mut marks = Vec::new();
        for id in 0..self.patients.len() {
            let patient = &self.patients[id];
            if patient.status() == Status::Infected
                && patient.time() > RECOVERY_AGE
                && self.rng.random::<f64>() < self.params.pr
            {
                marks.push(id);
            }
        }
        marks
    }

    /// Phase 4: symptomatic infected patients draw against their death
    /// probability accumulator.
    fn death_marks(&mut self) -> Vec<usize> {
        let mut marks = Vec::new();
        for id in 0..self.patients.len() {
            let patient = &self.patients[id];
            if patient.status() == Status::Infected
                && patient.has_symptoms()
                && self.rng.random::<f64>() < patient.death_probability()
            {
                marks.push(id);
            }
        }
        marks
    }

    /// Advance the simulation by `ticks` ticks, collecting every report.
    pub fn run_for(&mut self, ticks: u32) -> Result<Vec<TickReport>, EpidemicError> {
        let mut reports = Vec::with_capacity(ticks as usize);
        for _ in 0..ticks {
            reports.push(self.advance()?);
        }
        Ok(reports)
    }

    /// Number of individuals.
    pub fn population_size(&self) -> usize {
        self.patients.len()
    }

    /// Status of a node, if the id is valid.
    pub fn status(&self, id: usize) -> Option<Status> {
        self.patients.get(id).map(Patient::status)
    }

    /// Full patient record of a node, if the id is valid.
    pub fn patient(&self, id: usize) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// Ticks advanced so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Population totals per status.
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for patient in &self.patients {
            match patient.status() {
                Status::Susceptible => counts.susceptible += 1,
                Status::Infected => counts.infected += 1,
                Status::Recovered => counts.recovered += 1,
                Status::Deceased => counts.deceased += 1,
            }
        }
        counts
    }

    /// The contact graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Weight list of a node, aligned with its neighbor list, if the id is
    /// valid. Empty until `set_weights` has run.
    pub fn weights(&self, id: usize) -> Option<&[f64]> {
        self.weights.get(id).map(Vec::as_slice)
    }

    /// Topology label of the current graph.
    pub fn topology_label(&self) -> &'static str {
        self.graph.topology_label()
    }

    /// Transition parameters.
    pub fn params(&self) -> &EpidemicParams {
        &self.params
    }
}
