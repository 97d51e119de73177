//! # Metaplast Core
//!
//! Synapse states, transition topology and lattice types for Metaplast.
//!
//! A lattice holds one population of synapse units spread across eight
//! discrete states: four weak (`w1`..`w4`) and four strong (`s1`..`s4`),
//! numbered by distance from the weak/strong boundary. Twenty fixed
//! directed transitions move units between states:
//!
//! - **Potentiation** — ten edges with net flow toward strong states
//! - **Depression** — the ten mirror edges with net flow toward weak states
//!
//! ## Quick Start
//!
//! ```rust
//! use metaplast_core::prelude::*;
//!
//! let lattice = Lattice::new(100, EdgeWeights::default()).unwrap();
//! assert_eq!(lattice.total(), 800);
//! assert_eq!(lattice.strong_fraction().unwrap(), 0.5);
//!
//! let edge: Transition = "w1->s1".parse().unwrap();
//! assert_eq!(lattice.weight(edge), 0.4);
//! ```

pub mod types;
pub mod weights;
pub mod lattice;
pub mod topology;
pub mod error;
pub mod prelude;
