//! Error types for Metaplast operations.
//!
//! Every failure is deterministic given the inputs: construction rejects bad
//! configuration up front, and the lattice reports invariant violations
//! instead of silently clamping counts.

use thiserror::Error;

/// Result type for Metaplast operations.
pub type Result<T> = std::result::Result<T, MetaplastError>;

/// Errors that can occur during Metaplast operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetaplastError {
    /// Configuration errors, raised at construction.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Lattice bookkeeping errors.
    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),

    /// Label lookups against the fixed topology.
    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    /// Malformed trial input.
    #[error("Trial error: {0}")]
    Trial(#[from] TrialError),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MetaplastError {
    fn from(e: serde_json::Error) -> Self {
        MetaplastError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Edge weight outside [0, 1] or not finite.
    #[error("Invalid weight for {edge}: {weight} (must be 0.0-1.0)")]
    InvalidWeight { edge: String, weight: f64 },

    /// Base constant outside [0, 1] or not finite.
    #[error("Invalid base constant {name}: {value} (must be 0.0-1.0)")]
    InvalidBase { name: String, value: f64 },

    /// Starting population of zero units per state.
    #[error("Starting population must be at least one unit per state")]
    ZeroPopulation,

    /// Temperature must be finite and strictly positive.
    #[error("Invalid sigma: {0} (must be finite and > 0)")]
    InvalidSigma(f64),
}

/// Lattice bookkeeping errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Total population changed across a transition batch.
    #[error("Conservation violated: expected {expected} units, found {found}")]
    ConservationViolated { expected: u64, found: u64 },

    /// A migration asked for more units than the source holds.
    #[error("Overdraw from {state}: requested {requested}, available {available}")]
    Overdraw {
        state: String,
        requested: u64,
        available: u64,
    },

    /// The lattice holds no units at all.
    #[error("Lattice population is empty")]
    EmptyPopulation,

    /// Strong fraction requested for a lattice with zero total population.
    #[error("Division by zero: strong fraction of an empty lattice")]
    DivisionByZero,
}

/// Label lookup errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    /// Label does not name one of the twenty transitions.
    #[error("Unknown edge label: {0}")]
    UnknownEdge(String),

    /// Label does not name one of the eight synapse states.
    #[error("Unknown state label: {0}")]
    UnknownState(String),
}

/// Trial input errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrialError {
    /// Trial label outside {0, 1}.
    #[error("Invalid trial label {label} at index {index} (must be 0 or 1)")]
    InvalidLabel { index: usize, label: u8 },
}

// Convenience constructors
impl MetaplastError {
    pub fn unknown_edge(label: impl Into<String>) -> Self {
        MetaplastError::Topology(TopologyError::UnknownEdge(label.into()))
    }

    pub fn unknown_state(label: impl Into<String>) -> Self {
        MetaplastError::Topology(TopologyError::UnknownState(label.into()))
    }

    pub fn invalid_weight(edge: impl Into<String>, weight: f64) -> Self {
        MetaplastError::Config(ConfigError::InvalidWeight {
            edge: edge.into(),
            weight,
        })
    }

    pub fn invalid_base(name: impl Into<String>, value: f64) -> Self {
        MetaplastError::Config(ConfigError::InvalidBase {
            name: name.into(),
            value,
        })
    }

    /// Whether this error signals a defect rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            MetaplastError::Lattice(
                LatticeError::ConservationViolated { .. }
                    | LatticeError::Overdraw { .. }
                    | LatticeError::EmptyPopulation
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_render_with_category() {
        let err = MetaplastError::unknown_edge("w9->s1");
        assert_eq!(err.to_string(), "Topology error: Unknown edge label: w9->s1");

        let err: MetaplastError = ConfigError::ZeroPopulation.into();
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn invariant_violations_are_classified() {
        let err: MetaplastError = LatticeError::ConservationViolated {
            expected: 800,
            found: 799,
        }
        .into();
        assert!(err.is_invariant_violation());

        let err: MetaplastError = LatticeError::DivisionByZero.into();
        assert!(!err.is_invariant_violation());
        assert!(!MetaplastError::invalid_weight("w1->s1", 1.5).is_invariant_violation());
    }
}
