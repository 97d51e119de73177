//! # Metaplast
//!
//! Stochastic metaplastic synapse lattices competing in a two-alternative
//! forced-choice task.
//!
//! Each side of the task is backed by a population of synapse units spread
//! over eight strength states. Units migrate between states along twenty
//! weighted transitions; reinforcement potentiates the correct side and
//! depresses the other, and decisions follow the difference in how much of
//! each population sits in strong states.
//!
//! ## Quick Start
//!
//! ```rust
//! use metaplast::prelude::*;
//!
//! // Build a model: 100 units per state, sigma 0.1, seeded generator
//! let config = ModelConfig::default().with_seed(7);
//! let mut model = MetaplasticityModel::new(&config).unwrap();
//! assert_eq!(model.p_left().unwrap(), 0.5);
//!
//! // Reward the left side on every trial
//! let trials = vec![Side::Left; 200];
//! let log = TrialRunner::new().run(&mut model, &trials).unwrap();
//!
//! let summary = RunSummary::from_log(&log);
//! println!("{}% correct", summary.accuracy_percent());
//! assert!(model.strong_fraction(Side::Left).unwrap() > 0.5);
//! ```
//!
//! ## Architecture
//!
//! - [`metaplast_core`] - Synapse states, transitions, weights, lattices
//! - [`metaplast_runtime`] - Transition engine, decision model, trial runner
//!
//! ## Key Concepts
//!
//! ### The Lattice
//!
//! | Family | Edges | Weight |
//! |--------|-------|--------|
//! | Chain | w2→w1, s1→s2, ... and mirrors | p, p², p³ by graduation |
//! | Boundary | w1↔s1 | q |
//! | Jump | w2..w4→s1, s2..s4→w1 | q², q^(8/3), q^(10/3) |
//!
//! ### Decision Rule
//!
//! `p_left = 1 / (1 + exp(-(f_left - f_right) / sigma))`, where `f` is a
//! side's strong fraction. Small sigma makes the choice nearly
//! deterministic; large sigma makes it nearly uniform.
//!
//! ### Reinforcement
//!
//! Outcome-locked: the correct side is potentiated and the other depressed
//! on every trial, regardless of the guess.

// Re-export all subcrates
pub use metaplast_core as core;
pub use metaplast_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use metaplast::prelude::*;
/// ```
pub mod prelude {
    // Model, runner, metrics, export and all core types
    pub use metaplast_runtime::prelude::*;

    // Transition engine
    pub use metaplast_runtime::engine::{apply, apply_batch, apply_labels, potentiate, depress};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
