//! Metaplast Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use metaplast_runtime::prelude::*;
//! ```

// Re-export the model
pub use crate::model::{MetaplasticityModel, ModelConfig, logistic, DEFAULT_SIGMA, DEFAULT_SEED};

// Re-export the runner
pub use crate::runner::{TrialRunner, TrialLog, TrialTrace};

// Re-export trial generation
pub use crate::trials::TrialPattern;

// Re-export metrics and export
pub use crate::metrics::{RunSummary, block_accuracy, trailing_accuracy};
pub use crate::export::{RunReport, LatticeSnapshot, lattice_snapshot};

// Re-export from core
pub use metaplast_core::prelude::*;
