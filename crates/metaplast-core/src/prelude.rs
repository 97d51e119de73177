//! Metaplast Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use metaplast_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    SynapseState, Transition, TransitionFamily,
    Plasticity, Side,
    POTENTIATION_ORDER, DEPRESSION_ORDER,
};

// Re-export lattice and weights
pub use crate::lattice::{Lattice, StateCount, DEFAULT_STARTING_POPULATION};
pub use crate::weights::{EdgeWeights, WeightConfig};

// Re-export the graph view
pub use crate::topology::LatticeGraph;

// Re-export error types
pub use crate::error::{MetaplastError, Result};
