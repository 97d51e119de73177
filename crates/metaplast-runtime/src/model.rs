//! Metaplasticity model — two competing lattices and a logistic decision rule.
//!
//! The model owns a left and a right lattice plus its own random generator.
//! Each trial it compares the strong fractions of the two populations,
//! picks a side with logistic probability, and then reinforces according to
//! the true outcome: the correct side is potentiated and the other
//! depressed, whatever the model guessed.

use crate::engine;
use metaplast_core::error::{ConfigError, Result};
use metaplast_core::lattice::{Lattice, DEFAULT_STARTING_POPULATION};
use metaplast_core::types::Side;
use metaplast_core::weights::{EdgeWeights, WeightConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub const DEFAULT_SIGMA: f64 = 0.1;
pub const DEFAULT_SEED: u64 = 42;

/// Model construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Units placed in each of the eight states of each lattice.
    #[serde(default = "default_starting_population")]
    pub starting_population: u64,
    /// Decision temperature. Small values make the choice nearly deterministic.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Seed for the model's generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub weights: WeightConfig,
}

fn default_starting_population() -> u64 { DEFAULT_STARTING_POPULATION }
fn default_sigma() -> f64 { DEFAULT_SIGMA }
fn default_seed() -> u64 { DEFAULT_SEED }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            starting_population: default_starting_population(),
            sigma: default_sigma(),
            seed: default_seed(),
            weights: WeightConfig::default(),
        }
    }
}

impl ModelConfig {
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_starting_population(mut self, starting_population: u64) -> Self {
        self.starting_population = starting_population;
        self
    }
}

/// Logistic function 1 / (1 + e^(-x)).
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Two-population metaplastic decision model.
#[derive(Debug, Clone)]
pub struct MetaplasticityModel<R = ChaCha8Rng> {
    left: Lattice,
    right: Lattice,
    sigma: f64,
    rng: R,
}

impl MetaplasticityModel<ChaCha8Rng> {
    /// Build a model seeded from `config.seed`.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> MetaplasticityModel<R> {
    /// Build a model drawing randomness from an injected generator.
    /// `config.seed` is ignored.
    pub fn with_rng(config: &ModelConfig, rng: R) -> Result<Self> {
        let weights = config.weights.build()?;
        Self::with_weights(config.starting_population, weights, config.sigma, rng)
    }

    /// Build a model over an explicit weight table.
    pub fn with_weights(
        starting_population: u64,
        weights: EdgeWeights,
        sigma: f64,
        rng: R,
    ) -> Result<Self> {
        let left = Lattice::new(starting_population, weights.clone())?;
        let right = Lattice::new(starting_population, weights)?;
        Self::from_lattices(left, right, sigma, rng)
    }

    /// Build a model from two prepared lattices.
    pub fn from_lattices(left: Lattice, right: Lattice, sigma: f64, rng: R) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ConfigError::InvalidSigma(sigma).into());
        }
        left.check_conservation()?;
        right.check_conservation()?;
        debug!(
            sigma,
            left_total = left.total(),
            right_total = right.total(),
            "constructed metaplasticity model"
        );
        Ok(Self {
            left,
            right,
            sigma,
            rng,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn lattice(&self, side: Side) -> &Lattice {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn strong_fraction(&self, side: Side) -> Result<f64> {
        self.lattice(side).strong_fraction()
    }

    /// Left strong fraction minus right strong fraction.
    pub fn decision_variable(&self) -> Result<f64> {
        Ok(self.strong_fraction(Side::Left)? - self.strong_fraction(Side::Right)?)
    }

    /// Probability that the next decision picks the left side.
    ///
    /// Kept strictly inside (0, 1): at small sigma the logistic rounds to
    /// exactly 0 or 1 in floating point.
    pub fn p_left(&self) -> Result<f64> {
        let p = logistic(self.decision_variable()? / self.sigma);
        Ok(p.clamp(f64::EPSILON, 1.0 - f64::EPSILON))
    }

    /// Sample a decision from the current state.
    pub fn choose_side(&mut self) -> Result<Side> {
        let p_left = self.p_left()?;
        let roll: f64 = self.rng.gen();
        let side = if roll < p_left { Side::Left } else { Side::Right };
        trace!(p_left, roll, %side, "chose side");
        Ok(side)
    }

    /// Potentiate the correct side's lattice, then depress the other.
    pub fn react_to_outcome(&mut self, correct: Side) -> Result<()> {
        let Self { left, right, rng, .. } = self;
        let (winner, loser) = match correct {
            Side::Left => (left, right),
            Side::Right => (right, left),
        };
        engine::potentiate(winner, rng)?;
        engine::depress(loser, rng)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn lattice_mut(&mut self, side: Side) -> &mut Lattice {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
