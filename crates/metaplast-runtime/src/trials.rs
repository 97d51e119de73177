//! Trial sequence generation.
//!
//! The model never generates its own outcomes; these helpers build the
//! sequences that callers feed to the runner.

use metaplast_core::types::Side;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Independent fair coin flips.
pub fn uniform<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Side> {
    (0..count)
        .map(|_| if rng.gen_bool(0.5) { Side::Right } else { Side::Left })
        .collect()
}

/// The same side on every trial.
pub fn constant(side: Side, count: usize) -> Vec<Side> {
    vec![side; count]
}

/// `blocks` runs of `block_length` identical outcomes, alternating sides and
/// starting with `first`. Used for reversal learning.
pub fn blocked(block_length: usize, blocks: usize, first: Side) -> Vec<Side> {
    let mut trials = Vec::with_capacity(block_length * blocks);
    let mut side = first;
    for _ in 0..blocks {
        trials.extend(std::iter::repeat(side).take(block_length));
        side = side.other();
    }
    trials
}

/// Named sequence shapes, as used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialPattern {
    #[default]
    Uniform,
    Blocked,
    Left,
    Right,
}

impl TrialPattern {
    /// Build `count` trials. `block_length` applies to [`TrialPattern::Blocked`]
    /// only; a trailing partial block is kept.
    pub fn generate<R: Rng + ?Sized>(
        self,
        count: usize,
        block_length: usize,
        rng: &mut R,
    ) -> Vec<Side> {
        match self {
            TrialPattern::Uniform => uniform(count, rng),
            TrialPattern::Left => constant(Side::Left, count),
            TrialPattern::Right => constant(Side::Right, count),
            TrialPattern::Blocked => {
                let block_length = block_length.max(1);
                let blocks = count.div_ceil(block_length);
                let mut trials = blocked(block_length, blocks, Side::Left);
                trials.truncate(count);
                trials
            }
        }
    }
}

impl std::str::FromStr for TrialPattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(TrialPattern::Uniform),
            "blocked" => Ok(TrialPattern::Blocked),
            "left" => Ok(TrialPattern::Left),
            "right" => Ok(TrialPattern::Right),
            other => Err(format!(
                "unknown trial pattern '{}' (expected uniform, blocked, left or right)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn uniform_is_roughly_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let trials = uniform(10_000, &mut rng);
        let left = trials.iter().filter(|&&t| t == Side::Left).count();
        assert!((4_700..=5_300).contains(&left), "left = {}", left);
    }

    #[test]
    fn blocked_alternates() {
        let trials = blocked(10, 3, Side::Left);
        assert_eq!(trials.len(), 30);
        assert!(trials[..10].iter().all(|&t| t == Side::Left));
        assert!(trials[10..20].iter().all(|&t| t == Side::Right));
        assert!(trials[20..].iter().all(|&t| t == Side::Left));
    }

    #[test]
    fn blocked_pattern_keeps_partial_block() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let trials = TrialPattern::Blocked.generate(25, 10, &mut rng);
        assert_eq!(trials.len(), 25);
        assert_eq!(trials[24], Side::Left);
        assert_eq!(trials[19], Side::Right);
    }

    #[test]
    fn pattern_names_parse() {
        assert_eq!("Blocked".parse::<TrialPattern>().unwrap(), TrialPattern::Blocked);
        assert_eq!("left".parse::<TrialPattern>().unwrap(), TrialPattern::Left);
        assert!("zigzag".parse::<TrialPattern>().is_err());
    }
}
