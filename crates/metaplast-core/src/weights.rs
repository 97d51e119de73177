//! Transition weights derived from the two base constants.
//!
//! Chain steps use powers of `p`: the further a step reaches from the
//! boundary, the smaller its weight. Boundary crossings use `q`, and long
//! jumps from graduation `g` use `q^(2(g+1)/3)`.

use crate::error::{MetaplastError, Result};
use crate::types::{Transition, TransitionFamily};
use serde::{Deserialize, Serialize};

pub const DEFAULT_P: f64 = 0.3;
pub const DEFAULT_Q: f64 = 0.4;

/// Base constants for the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Base for chain steps.
    #[serde(default = "default_p")]
    pub p: f64,
    /// Base for boundary crossings and jumps.
    #[serde(default = "default_q")]
    pub q: f64,
}

fn default_p() -> f64 { DEFAULT_P }
fn default_q() -> f64 { DEFAULT_Q }

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            p: default_p(),
            q: default_q(),
        }
    }
}

impl WeightConfig {
    /// Build the full weight table, validating both bases.
    pub fn build(&self) -> Result<EdgeWeights> {
        EdgeWeights::from_bases(self.p, self.q)
    }
}

/// Per-transition migration probabilities, indexed by [`Transition::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeights([f64; Transition::COUNT]);

impl EdgeWeights {
    /// Derive all twenty weights from `p` and `q`.
    pub fn from_bases(p: f64, q: f64) -> Result<Self> {
        check_base("p", p)?;
        check_base("q", q)?;

        let mut weights = [0.0; Transition::COUNT];
        for t in Transition::ALL {
            weights[t.index()] = derived_weight(t, p, q);
        }
        let table = Self(weights);
        table.validate()?;
        Ok(table)
    }

    /// Same weight on every transition.
    pub fn uniform(weight: f64) -> Result<Self> {
        let table = Self([weight; Transition::COUNT]);
        table.validate()?;
        Ok(table)
    }

    /// Replace one transition's weight.
    pub fn with(mut self, transition: Transition, weight: f64) -> Result<Self> {
        check_weight(transition, weight)?;
        self.0[transition.index()] = weight;
        Ok(self)
    }

    pub fn get(&self, transition: Transition) -> f64 {
        self.0[transition.index()]
    }

    /// (transition, weight) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Transition, f64)> + '_ {
        Transition::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Check every weight lies in [0, 1].
    pub fn validate(&self) -> Result<()> {
        for (t, w) in self.iter() {
            check_weight(t, w)?;
        }
        Ok(())
    }
}

impl Default for EdgeWeights {
    fn default() -> Self {
        let mut weights = [0.0; Transition::COUNT];
        for t in Transition::ALL {
            weights[t.index()] = derived_weight(t, DEFAULT_P, DEFAULT_Q);
        }
        Self(weights)
    }
}

fn derived_weight(transition: Transition, p: f64, q: f64) -> f64 {
    let (src, dst) = transition.endpoints();
    match transition.family() {
        TransitionFamily::Chain => {
            let reach = src.graduation().max(dst.graduation()) - 1;
            p.powi(reach as i32)
        }
        TransitionFamily::Boundary => q,
        TransitionFamily::Jump => {
            let g = src.graduation() as f64;
            q.powf(2.0 * (g + 1.0) / 3.0)
        }
    }
}

fn check_base(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MetaplastError::invalid_base(name, value))
    }
}

fn check_weight(transition: Transition, weight: f64) -> Result<()> {
    if weight.is_finite() && (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(MetaplastError::invalid_weight(transition.label(), weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn chain_weights_are_graduated_powers_of_p() {
        let w = EdgeWeights::default();
        assert!(close(w.get(Transition::W2ToW1), 0.3));
        assert!(close(w.get(Transition::W3ToW2), 0.09));
        assert!(close(w.get(Transition::W4ToW3), 0.027));
        assert!(close(w.get(Transition::S1ToS2), 0.3));
        assert!(close(w.get(Transition::S2ToS3), 0.09));
        assert!(close(w.get(Transition::S3ToS4), 0.027));
    }

    #[test]
    fn depression_chain_mirrors_potentiation() {
        let w = EdgeWeights::default();
        assert_eq!(w.get(Transition::W1ToW2), w.get(Transition::W2ToW1));
        assert_eq!(w.get(Transition::W3ToW4), w.get(Transition::W4ToW3));
        assert_eq!(w.get(Transition::S2ToS1), w.get(Transition::S1ToS2));
        assert_eq!(w.get(Transition::S4ToS3), w.get(Transition::S3ToS4));
    }

    #[test]
    fn boundary_and_jump_weights() {
        let w = EdgeWeights::default();
        assert!(close(w.get(Transition::W1ToS1), 0.4));
        assert!(close(w.get(Transition::S1ToW1), 0.4));
        assert!(close(w.get(Transition::W2ToS1), 0.16));
        assert!(close(w.get(Transition::S2ToW1), 0.16));
        assert!(close(w.get(Transition::W3ToS1), 0.4f64.powf(8.0 / 3.0)));
        assert!(close(w.get(Transition::S4ToW1), 0.4f64.powf(10.0 / 3.0)));
        assert!(w.get(Transition::W2ToS1) > w.get(Transition::W3ToS1));
        assert!(w.get(Transition::W3ToS1) > w.get(Transition::W4ToS1));
    }

    #[test]
    fn default_matches_configured_defaults() {
        assert_eq!(WeightConfig::default().build().unwrap(), EdgeWeights::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(EdgeWeights::from_bases(1.2, 0.4).is_err());
        assert!(EdgeWeights::from_bases(0.3, f64::NAN).is_err());
        assert!(EdgeWeights::uniform(-0.1).is_err());
        assert!(EdgeWeights::default().with(Transition::W1ToS1, 1.0001).is_err());
        assert!(EdgeWeights::uniform(0.0).unwrap().with(Transition::W1ToS1, 1.0).is_ok());
    }
}
