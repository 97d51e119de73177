//! Shared types: synapse states, transitions, sides.
//!
//! Every state and transition is an enumerated id that doubles as an array
//! index, so the lattice never searches by label at update time.

use crate::error::{MetaplastError, Result, TrialError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight discrete synapse strength states.
///
/// Declared in canonical order from the deepest weak state to the deepest
/// strong state; the discriminant is the state's array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynapseState {
    W4,
    W3,
    W2,
    W1,
    S1,
    S2,
    S3,
    S4,
}

impl SynapseState {
    pub const COUNT: usize = 8;

    pub const ALL: [SynapseState; Self::COUNT] = [
        SynapseState::W4,
        SynapseState::W3,
        SynapseState::W2,
        SynapseState::W1,
        SynapseState::S1,
        SynapseState::S2,
        SynapseState::S3,
        SynapseState::S4,
    ];

    pub const STRONG: [SynapseState; 4] = [
        SynapseState::S1,
        SynapseState::S2,
        SynapseState::S3,
        SynapseState::S4,
    ];

    pub const WEAK: [SynapseState; 4] = [
        SynapseState::W1,
        SynapseState::W2,
        SynapseState::W3,
        SynapseState::W4,
    ];

    /// Array index of this state.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_strong(self) -> bool {
        self >= SynapseState::S1
    }

    /// Distance from the weak/strong boundary (1 for w1 and s1, 4 for w4 and s4).
    pub fn graduation(self) -> u32 {
        match self {
            SynapseState::W1 | SynapseState::S1 => 1,
            SynapseState::W2 | SynapseState::S2 => 2,
            SynapseState::W3 | SynapseState::S3 => 3,
            SynapseState::W4 | SynapseState::S4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SynapseState::W4 => "w4",
            SynapseState::W3 => "w3",
            SynapseState::W2 => "w2",
            SynapseState::W1 => "w1",
            SynapseState::S1 => "s1",
            SynapseState::S2 => "s2",
            SynapseState::S3 => "s3",
            SynapseState::S4 => "s4",
        }
    }
}

impl fmt::Display for SynapseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SynapseState {
    type Err = MetaplastError;

    fn from_str(s: &str) -> Result<Self> {
        SynapseState::ALL
            .into_iter()
            .find(|state| state.label() == s)
            .ok_or_else(|| MetaplastError::unknown_state(s))
    }
}

/// Direction of a plasticity batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plasticity {
    /// Net flow toward strong states.
    Potentiation,
    /// Net flow toward weak states.
    Depression,
}

impl Plasticity {
    /// The canonical batch order for this direction.
    pub fn order(self) -> &'static [Transition; 10] {
        match self {
            Plasticity::Potentiation => &POTENTIATION_ORDER,
            Plasticity::Depression => &DEPRESSION_ORDER,
        }
    }
}

/// Structural family of a transition, which fixes how its weight is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionFamily {
    /// Adjacent step inside the weak or the strong chain.
    Chain,
    /// The w1/s1 crossing.
    Boundary,
    /// Crossing from a graduated state straight to the opposite boundary state.
    Jump,
}

/// One of the twenty fixed directed transitions.
///
/// Discriminants 0..10 are the potentiation batch and 10..20 the depression
/// batch, each in canonical application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Transition {
    W1ToS1,
    W2ToS1,
    W3ToS1,
    W4ToS1,
    S1ToS2,
    W2ToW1,
    S2ToS3,
    W3ToW2,
    S3ToS4,
    W4ToW3,
    S1ToW1,
    S2ToW1,
    S3ToW1,
    S4ToW1,
    W1ToW2,
    S2ToS1,
    W2ToW3,
    S3ToS2,
    W3ToW4,
    S4ToS3,
}

/// Potentiation batch, boundary crossings first.
pub const POTENTIATION_ORDER: [Transition; 10] = [
    Transition::W1ToS1,
    Transition::W2ToS1,
    Transition::W3ToS1,
    Transition::W4ToS1,
    Transition::S1ToS2,
    Transition::W2ToW1,
    Transition::S2ToS3,
    Transition::W3ToW2,
    Transition::S3ToS4,
    Transition::W4ToW3,
];

/// Depression batch, boundary crossings first.
pub const DEPRESSION_ORDER: [Transition; 10] = [
    Transition::S1ToW1,
    Transition::S2ToW1,
    Transition::S3ToW1,
    Transition::S4ToW1,
    Transition::W1ToW2,
    Transition::S2ToS1,
    Transition::W2ToW3,
    Transition::S3ToS2,
    Transition::W3ToW4,
    Transition::S4ToS3,
];

impl Transition {
    pub const COUNT: usize = 20;

    pub const ALL: [Transition; Self::COUNT] = [
        Transition::W1ToS1,
        Transition::W2ToS1,
        Transition::W3ToS1,
        Transition::W4ToS1,
        Transition::S1ToS2,
        Transition::W2ToW1,
        Transition::S2ToS3,
        Transition::W3ToW2,
        Transition::S3ToS4,
        Transition::W4ToW3,
        Transition::S1ToW1,
        Transition::S2ToW1,
        Transition::S3ToW1,
        Transition::S4ToW1,
        Transition::W1ToW2,
        Transition::S2ToS1,
        Transition::W2ToW3,
        Transition::S3ToS2,
        Transition::W3ToW4,
        Transition::S4ToS3,
    ];

    /// Array index of this transition.
    pub fn index(self) -> usize {
        self as usize
    }

    /// (source, destination).
    pub fn endpoints(self) -> (SynapseState, SynapseState) {
        use SynapseState::*;
        match self {
            Transition::W1ToS1 => (W1, S1),
            Transition::W2ToS1 => (W2, S1),
            Transition::W3ToS1 => (W3, S1),
            Transition::W4ToS1 => (W4, S1),
            Transition::S1ToS2 => (S1, S2),
            Transition::W2ToW1 => (W2, W1),
            Transition::S2ToS3 => (S2, S3),
            Transition::W3ToW2 => (W3, W2),
            Transition::S3ToS4 => (S3, S4),
            Transition::W4ToW3 => (W4, W3),
            Transition::S1ToW1 => (S1, W1),
            Transition::S2ToW1 => (S2, W1),
            Transition::S3ToW1 => (S3, W1),
            Transition::S4ToW1 => (S4, W1),
            Transition::W1ToW2 => (W1, W2),
            Transition::S2ToS1 => (S2, S1),
            Transition::W2ToW3 => (W2, W3),
            Transition::S3ToS2 => (S3, S2),
            Transition::W3ToW4 => (W3, W4),
            Transition::S4ToS3 => (S4, S3),
        }
    }

    pub fn source(self) -> SynapseState {
        self.endpoints().0
    }

    pub fn destination(self) -> SynapseState {
        self.endpoints().1
    }

    pub fn plasticity(self) -> Plasticity {
        if self.index() < POTENTIATION_ORDER.len() {
            Plasticity::Potentiation
        } else {
            Plasticity::Depression
        }
    }

    pub fn family(self) -> TransitionFamily {
        let (src, dst) = self.endpoints();
        if src.is_strong() == dst.is_strong() {
            TransitionFamily::Chain
        } else if src.graduation() == 1 {
            TransitionFamily::Boundary
        } else {
            TransitionFamily::Jump
        }
    }

    /// Label in `"src->dst"` form.
    pub fn label(self) -> String {
        let (src, dst) = self.endpoints();
        format!("{}->{}", src, dst)
    }

    /// Find the transition between two states, if the topology has one.
    pub fn between(source: SynapseState, destination: SynapseState) -> Option<Transition> {
        Transition::ALL
            .into_iter()
            .find(|t| t.endpoints() == (source, destination))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (src, dst) = self.endpoints();
        write!(f, "{}->{}", src, dst)
    }
}

impl FromStr for Transition {
    type Err = MetaplastError;

    fn from_str(s: &str) -> Result<Self> {
        let (src, dst) = s
            .split_once("->")
            .ok_or_else(|| MetaplastError::unknown_edge(s))?;
        let src: SynapseState = src.trim().parse().map_err(|_| MetaplastError::unknown_edge(s))?;
        let dst: SynapseState = dst.trim().parse().map_err(|_| MetaplastError::unknown_edge(s))?;
        Transition::between(src, dst).ok_or_else(|| MetaplastError::unknown_edge(s))
    }
}

/// One of the two competing populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Trial label: 0 for left, 1 for right.
    pub fn index(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Parse a trial label at position `index` of a sequence.
    pub fn from_label(index: usize, label: u8) -> Result<Side> {
        match label {
            0 => Ok(Side::Left),
            1 => Ok(Side::Right),
            _ => Err(TrialError::InvalidLabel { index, label }.into()),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
