//! # Metaplast Runtime
//!
//! Transition engine, two-population decision model and trial runner.
//!
//! The runtime is the "organism": it owns a left and a right lattice,
//! samples a choice from their relative strength on every trial, and
//! reshapes both populations according to the true outcome.

pub mod engine;
pub mod model;
pub mod runner;
pub mod trials;
pub mod metrics;
pub mod export;
pub mod prelude;
