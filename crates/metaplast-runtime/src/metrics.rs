//! Run metrics — accuracy and choice balance computed from a trial log.

use crate::runner::TrialLog;
use metaplast_core::types::Side;
use serde::Serialize;

/// Aggregate accuracy of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub trials: usize,
    pub correct: usize,
    /// correct / trials, 0.0 for an empty run.
    pub accuracy: f64,
    pub left_guesses: usize,
    pub right_guesses: usize,
}

impl RunSummary {
    pub fn from_log(log: &TrialLog) -> Self {
        let trials = log.len();
        let correct = log.correct.iter().filter(|&&c| c).count();
        let left_guesses = log.guesses.iter().filter(|&&g| g == Side::Left).count();
        Self {
            trials,
            correct,
            accuracy: ratio(correct, trials),
            left_guesses,
            right_guesses: trials - left_guesses,
        }
    }

    /// Accuracy as a percentage rounded to two decimals.
    pub fn accuracy_percent(&self) -> f64 {
        (self.accuracy * 10_000.0).round() / 100.0
    }

    pub fn left_share(&self) -> f64 {
        ratio(self.left_guesses, self.trials)
    }
}

/// Accuracy of each consecutive block of `block_length` trials. A trailing
/// partial block is included.
pub fn block_accuracy(log: &TrialLog, block_length: usize) -> Vec<f64> {
    if block_length == 0 {
        return vec![];
    }
    log.correct
        .chunks(block_length)
        .map(|block| ratio(block.iter().filter(|&&c| c).count(), block.len()))
        .collect()
}

/// Accuracy over the trailing `window` trials.
pub fn trailing_accuracy(log: &TrialLog, window: usize) -> f64 {
    let start = log.correct.len().saturating_sub(window);
    let tail = &log.correct[start..];
    ratio(tail.iter().filter(|&&c| c).count(), tail.len())
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(guesses: &[Side], correct: &[bool]) -> TrialLog {
        TrialLog {
            guesses: guesses.to_vec(),
            correct: correct.to_vec(),
            trace: None,
        }
    }

    #[test]
    fn summary_counts() {
        let log = log(
            &[Side::Left, Side::Left, Side::Right],
            &[true, false, true],
        );
        let summary = RunSummary::from_log(&log);
        assert_eq!(summary.trials, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.left_guesses, 2);
        assert_eq!(summary.right_guesses, 1);
        assert_eq!(summary.accuracy_percent(), 66.67);
    }

    #[test]
    fn empty_log_summary() {
        let summary = RunSummary::from_log(&TrialLog::default());
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.left_share(), 0.0);
    }

    #[test]
    fn blocks_and_trailing_window() {
        let log = log(&[Side::Left; 5], &[true, true, false, false, true]);
        assert_eq!(block_accuracy(&log, 2), vec![1.0, 0.0, 1.0]);
        assert!(block_accuracy(&log, 0).is_empty());
        assert_eq!(trailing_accuracy(&log, 3), 1.0 / 3.0);
        assert_eq!(trailing_accuracy(&log, 50), 0.6);
    }
}
