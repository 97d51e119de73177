//! Trial runner — feeds outcomes through a model one trial at a time.
//!
//! Every trial completes its reinforcement before the next decision is
//! sampled, since decisions read the state that reinforcement writes.

use crate::model::MetaplasticityModel;
use metaplast_core::error::Result;
use metaplast_core::types::Side;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Model state observed when a decision was made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialTrace {
    pub trial: usize,
    pub left_strong_fraction: f64,
    pub right_strong_fraction: f64,
    pub p_left: f64,
}

/// Ordered guesses and correctness for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialLog {
    pub guesses: Vec<Side>,
    pub correct: Vec<bool>,
    /// Present only when the runner was built with tracing enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TrialTrace>>,
}

impl TrialLog {
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Guesses as trial labels (0 = left, 1 = right).
    pub fn guess_labels(&self) -> Vec<u8> {
        self.guesses.iter().map(|g| g.index()).collect()
    }

    /// Correctness as 0/1 flags.
    pub fn correct_flags(&self) -> Vec<u8> {
        self.correct.iter().map(|&c| c as u8).collect()
    }
}

/// Drives a trial sequence through a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialRunner {
    record_trace: bool,
}

impl TrialRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record strong fractions and p_left at every decision.
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }

    /// Run `trials` in order. Each entry names the correct side.
    pub fn run<R: Rng>(
        &self,
        model: &mut MetaplasticityModel<R>,
        trials: &[Side],
    ) -> Result<TrialLog> {
        self.run_observed(model, trials, |_, _| {})
    }

    /// As [`TrialRunner::run`], calling `observe(trial, correct)` after each
    /// trial's reinforcement.
    pub fn run_observed<R: Rng>(
        &self,
        model: &mut MetaplasticityModel<R>,
        trials: &[Side],
        mut observe: impl FnMut(usize, bool),
    ) -> Result<TrialLog> {
        debug!(trials = trials.len(), sigma = model.sigma(), "starting run");

        let mut log = TrialLog {
            guesses: Vec::with_capacity(trials.len()),
            correct: Vec::with_capacity(trials.len()),
            trace: self.record_trace.then(|| Vec::with_capacity(trials.len())),
        };

        for (i, &outcome) in trials.iter().enumerate() {
            if let Some(trace) = log.trace.as_mut() {
                trace.push(TrialTrace {
                    trial: i,
                    left_strong_fraction: model.strong_fraction(Side::Left)?,
                    right_strong_fraction: model.strong_fraction(Side::Right)?,
                    p_left: model.p_left()?,
                });
            }

            let guess = model.choose_side()?;
            model.react_to_outcome(outcome)?;

            trace!(trial = i, %guess, %outcome, "trial complete");
            log.guesses.push(guess);
            log.correct.push(guess == outcome);
            observe(i, guess == outcome);
        }

        debug!(
            trials = log.len(),
            correct = log.correct.iter().filter(|&&c| c).count(),
            "run finished"
        );
        Ok(log)
    }

    /// Run raw labels. Every label is validated before the first trial.
    pub fn run_labels<R: Rng>(
        &self,
        model: &mut MetaplasticityModel<R>,
        labels: &[u8],
    ) -> Result<TrialLog> {
        let trials = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| Side::from_label(i, label))
            .collect::<Result<Vec<_>>>()?;
        self.run(model, &trials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelConfig;
    use metaplast_core::error::{MetaplastError, TrialError};

    fn model() -> MetaplasticityModel {
        MetaplasticityModel::new(&ModelConfig::default()).unwrap()
    }

    #[test]
    fn empty_sequence_gives_empty_log() {
        let mut model = model();
        let log = TrialRunner::new().run(&mut model, &[]).unwrap();
        assert!(log.is_empty());
        assert!(log.correct.is_empty());
        assert_eq!(model.strong_fraction(Side::Left).unwrap(), 0.5);
    }

    #[test]
    fn log_has_one_entry_per_trial() {
        let trials = [Side::Left, Side::Right, Side::Right, Side::Left, Side::Left];
        let log = TrialRunner::new().run(&mut model(), &trials).unwrap();
        assert_eq!(log.len(), 5);
        assert_eq!(log.correct.len(), 5);
        for i in 0..5 {
            assert_eq!(log.correct[i], log.guesses[i] == trials[i]);
        }
        assert!(log.trace.is_none());
    }

    #[test]
    fn flags_use_zero_and_one() {
        let log = TrialRunner::new()
            .run_labels(&mut model(), &[0, 1, 1, 0, 1, 0])
            .unwrap();
        assert!(log.guess_labels().iter().all(|&g| g <= 1));
        assert!(log.correct_flags().iter().all(|&c| c <= 1));
        assert_eq!(log.guess_labels().len(), 6);
    }

    #[test]
    fn invalid_label_rejected_before_any_trial() {
        let mut model = model();
        let before = model.lattice(Side::Left).clone();
        let err = TrialRunner::new()
            .run_labels(&mut model, &[0, 1, 3, 0])
            .unwrap_err();
        assert_eq!(
            err,
            MetaplastError::Trial(TrialError::InvalidLabel { index: 2, label: 3 })
        );
        assert_eq!(model.lattice(Side::Left), &before);
    }

    #[test]
    fn observer_sees_every_trial_in_order() {
        let trials = vec![Side::Right; 7];
        let mut seen = Vec::new();
        let log = TrialRunner::new()
            .run_observed(&mut model(), &trials, |i, correct| seen.push((i, correct)))
            .unwrap();
        assert_eq!(seen.len(), 7);
        for (i, &(index, correct)) in seen.iter().enumerate() {
            assert_eq!(index, i);
            assert_eq!(correct, log.correct[i]);
        }
    }

    #[test]
    fn trace_starts_at_the_fresh_state() {
        let trials = vec![Side::Left; 10];
        let log = TrialRunner::new().with_trace().run(&mut model(), &trials).unwrap();
        let trace = log.trace.expect("trace requested");
        assert_eq!(trace.len(), 10);
        assert_eq!(trace[0].p_left, 0.5);
        assert_eq!(trace[0].left_strong_fraction, 0.5);
        assert!(trace.iter().enumerate().all(|(i, t)| t.trial == i));
    }
}
