//! Lattice — one population's distribution over the eight synapse states.
//!
//! Units only move between states; they are never created or destroyed.
//! The lattice records its initial total so that any transition engine can
//! verify conservation after a batch.

use crate::error::{ConfigError, LatticeError, Result};
use crate::types::{SynapseState, Transition};
use crate::weights::EdgeWeights;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STARTING_POPULATION: u64 = 100;

/// Node counts plus the weight table for both plasticity directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    counts: [u64; SynapseState::COUNT],
    weights: EdgeWeights,
    initial_total: u64,
}

impl Lattice {
    /// Every state starts with `starting_population` units.
    pub fn new(starting_population: u64, weights: EdgeWeights) -> Result<Self> {
        if starting_population == 0 {
            return Err(ConfigError::ZeroPopulation.into());
        }
        Self::from_counts([starting_population; SynapseState::COUNT], weights)
    }

    /// Start from explicit per-state counts, indexed by [`SynapseState::index`].
    pub fn from_counts(counts: [u64; SynapseState::COUNT], weights: EdgeWeights) -> Result<Self> {
        weights.validate()?;
        let initial_total: u64 = counts.iter().sum();
        if initial_total == 0 {
            return Err(ConfigError::ZeroPopulation.into());
        }
        Ok(Self {
            counts,
            weights,
            initial_total,
        })
    }

    pub fn count(&self, state: SynapseState) -> u64 {
        self.counts[state.index()]
    }

    pub fn counts(&self) -> &[u64; SynapseState::COUNT] {
        &self.counts
    }

    pub fn weight(&self, transition: Transition) -> f64 {
        self.weights.get(transition)
    }

    pub fn weights(&self) -> &EdgeWeights {
        &self.weights
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Population fixed at construction.
    pub fn initial_total(&self) -> u64 {
        self.initial_total
    }

    pub fn strong_total(&self) -> u64 {
        SynapseState::STRONG.iter().map(|s| self.count(*s)).sum()
    }

    pub fn weak_total(&self) -> u64 {
        SynapseState::WEAK.iter().map(|s| self.count(*s)).sum()
    }

    /// Share of the population currently in strong states.
    pub fn strong_fraction(&self) -> Result<f64> {
        let strong = self.strong_total();
        let total = strong + self.weak_total();
        if total == 0 {
            return Err(LatticeError::DivisionByZero.into());
        }
        Ok(strong as f64 / total as f64)
    }

    /// Move `units` from the transition's source to its destination.
    pub fn migrate(&mut self, transition: Transition, units: u64) -> Result<()> {
        let (src, dst) = transition.endpoints();
        let available = self.counts[src.index()];
        if units > available {
            return Err(LatticeError::Overdraw {
                state: src.label().to_string(),
                requested: units,
                available,
            }
            .into());
        }
        self.counts[src.index()] -= units;
        self.counts[dst.index()] += units;
        Ok(())
    }

    /// Verify the population still equals the initial total.
    pub fn check_conservation(&self) -> Result<()> {
        let found = self.total();
        if found == 0 {
            return Err(LatticeError::EmptyPopulation.into());
        }
        if found != self.initial_total {
            return Err(LatticeError::ConservationViolated {
                expected: self.initial_total,
                found,
            }
            .into());
        }
        Ok(())
    }

    /// Labeled counts in canonical state order.
    pub fn snapshot(&self) -> Vec<StateCount> {
        SynapseState::ALL
            .iter()
            .map(|&state| StateCount {
                state,
                count: self.count(state),
            })
            .collect()
    }
}

/// One state's population at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCount {
    pub state: SynapseState,
    pub count: u64,
}
