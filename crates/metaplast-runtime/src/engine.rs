//! Transition engine — stochastic migration along ordered edge batches.
//!
//! # How It Works
//!
//! Applying an edge draws how many of the source's units migrate: each unit
//! moves independently with the edge's weight as probability, so the count
//! is a single Binomial(N_src, p) sample.
//!
//! A batch applies its edges one after another. Later edges see the counts
//! already changed by earlier ones in the same batch, so units can cascade
//! through several states in a single step. Batch order is part of the
//! model's behavior.

use metaplast_core::error::{MetaplastError, Result};
use metaplast_core::lattice::Lattice;
use metaplast_core::types::{Plasticity, Transition};
use rand::Rng;
use rand_distr::{Binomial, Distribution};
use tracing::trace;

/// Apply one transition. Returns the number of units moved.
pub fn apply<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    transition: Transition,
    rng: &mut R,
) -> Result<u64> {
    let available = lattice.count(transition.source());
    let p = lattice.weight(transition);

    let moved = if available == 0 || p == 0.0 {
        0
    } else if p == 1.0 {
        available
    } else {
        Binomial::new(available, p)
            .map_err(|_| MetaplastError::invalid_weight(transition.label(), p))?
            .sample(rng)
    };

    lattice.migrate(transition, moved)?;
    trace!(edge = %transition, available, moved, "applied transition");
    Ok(moved)
}

/// Apply transitions sequentially in the given order, then check that the
/// population was conserved.
pub fn apply_batch<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    transitions: &[Transition],
    rng: &mut R,
) -> Result<()> {
    for &t in transitions {
        apply(lattice, t, rng)?;
    }
    lattice.check_conservation()
}

/// Resolve `"src->dst"` labels, then apply them as a batch.
///
/// All labels are resolved before any edge runs, so an unknown label leaves
/// the lattice untouched.
pub fn apply_labels<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    labels: &[&str],
    rng: &mut R,
) -> Result<()> {
    let transitions = labels
        .iter()
        .map(|label| label.parse::<Transition>())
        .collect::<Result<Vec<_>>>()?;
    apply_batch(lattice, &transitions, rng)
}

/// Apply the canonical batch for a plasticity direction.
pub fn apply_plasticity<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    plasticity: Plasticity,
    rng: &mut R,
) -> Result<()> {
    apply_batch(lattice, plasticity.order(), rng)
}

pub fn potentiate<R: Rng + ?Sized>(lattice: &mut Lattice, rng: &mut R) -> Result<()> {
    apply_plasticity(lattice, Plasticity::Potentiation, rng)
}

pub fn depress<R: Rng + ?Sized>(lattice: &mut Lattice, rng: &mut R) -> Result<()> {
    apply_plasticity(lattice, Plasticity::Depression, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaplast_core::types::SynapseState;
    use metaplast_core::weights::EdgeWeights;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn zero_weights_move_nothing() {
        let mut lattice = Lattice::new(100, EdgeWeights::uniform(0.0).unwrap()).unwrap();
        let before = lattice.clone();
        potentiate(&mut lattice, &mut rng()).unwrap();
        depress(&mut lattice, &mut rng()).unwrap();
        assert_eq!(lattice, before);
    }

    #[test]
    fn unit_weight_moves_every_source_unit() {
        let weights = EdgeWeights::uniform(0.0)
            .unwrap()
            .with(Transition::W3ToS1, 1.0)
            .unwrap();
        let mut lattice = Lattice::new(100, weights).unwrap();
        let moved = apply(&mut lattice, Transition::W3ToS1, &mut rng()).unwrap();
        assert_eq!(moved, 100);
        assert_eq!(lattice.count(SynapseState::W3), 0);
        assert_eq!(lattice.count(SynapseState::S1), 200);
    }

    #[test]
    fn moved_units_never_exceed_source() {
        let mut lattice = Lattice::new(50, EdgeWeights::default()).unwrap();
        let mut rng = rng();
        for _ in 0..200 {
            for t in Transition::ALL {
                let available = lattice.count(t.source());
                let moved = apply(&mut lattice, t, &mut rng).unwrap();
                assert!(moved <= available);
            }
        }
        assert_eq!(lattice.total(), 400);
    }

    #[test]
    fn cascade_carries_units_through_the_batch() {
        // With every weight at 1, w2 empties into w1 and then w1 into s1.
        let mut lattice = Lattice::new(10, EdgeWeights::uniform(1.0).unwrap()).unwrap();
        apply_batch(&mut lattice, &[Transition::W2ToW1, Transition::W1ToS1], &mut rng()).unwrap();
        assert_eq!(lattice.count(SynapseState::W2), 0);
        assert_eq!(lattice.count(SynapseState::W1), 0);
        assert_eq!(lattice.count(SynapseState::S1), 30);
    }

    #[test]
    fn unknown_label_leaves_lattice_untouched() {
        let mut lattice = Lattice::new(10, EdgeWeights::uniform(1.0).unwrap()).unwrap();
        let before = lattice.clone();
        let err = apply_labels(&mut lattice, &["w1->s1", "w1->s4"], &mut rng()).unwrap_err();
        assert_eq!(err, MetaplastError::unknown_edge("w1->s4"));
        assert_eq!(lattice, before);
    }

    #[test]
    fn labels_apply_like_transitions() {
        let mut by_label = Lattice::new(100, EdgeWeights::default()).unwrap();
        let mut by_id = by_label.clone();
        apply_labels(&mut by_label, &["w1->s1", "s1->s2"], &mut rng()).unwrap();
        apply_batch(&mut by_id, &[Transition::W1ToS1, Transition::S1ToS2], &mut rng()).unwrap();
        assert_eq!(by_label, by_id);
    }

    #[test]
    fn mean_migration_matches_weight() {
        let mut rng = rng();
        let trials = 2_000;
        let mut moved_total = 0u64;
        for _ in 0..trials {
            let mut lattice = Lattice::new(100, EdgeWeights::default()).unwrap();
            moved_total += apply(&mut lattice, Transition::W1ToS1, &mut rng).unwrap();
        }
        let mean = moved_total as f64 / trials as f64;
        // Binomial(100, 0.4): mean 40, standard error of the mean ~0.11.
        assert!((mean - 40.0).abs() < 1.0, "mean = {}", mean);
    }
}
