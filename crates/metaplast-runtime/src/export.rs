//! Run report exporter — serialize a finished run for downstream analysis.
//!
//! A report bundles the configuration that produced the run, its summary,
//! the ordered guess/correctness flags, the optional per-trial trace and the
//! final population of both lattices.

use crate::metrics::RunSummary;
use crate::model::{MetaplasticityModel, ModelConfig};
use crate::runner::{TrialLog, TrialTrace};
use metaplast_core::error::Result;
use metaplast_core::lattice::{Lattice, StateCount};
use metaplast_core::types::Side;
use rand::Rng;
use serde::Serialize;

/// Final state of one lattice.
#[derive(Debug, Clone, Serialize)]
pub struct LatticeSnapshot {
    pub side: Side,
    pub strong_fraction: f64,
    pub strong_total: u64,
    pub weak_total: u64,
    pub states: Vec<StateCount>,
}

/// Snapshot a lattice.
pub fn lattice_snapshot(side: Side, lattice: &Lattice) -> Result<LatticeSnapshot> {
    Ok(LatticeSnapshot {
        side,
        strong_fraction: lattice.strong_fraction()?,
        strong_total: lattice.strong_total(),
        weak_total: lattice.weak_total(),
        states: lattice.snapshot(),
    })
}

/// Everything needed to reproduce and inspect one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub config: ModelConfig,
    pub summary: RunSummary,
    pub guesses: Vec<u8>,
    pub correct: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TrialTrace>>,
    pub lattices: Vec<LatticeSnapshot>,
}

impl RunReport {
    pub fn new<R: Rng>(
        config: &ModelConfig,
        log: &TrialLog,
        model: &MetaplasticityModel<R>,
    ) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            summary: RunSummary::from_log(log),
            guesses: log.guess_labels(),
            correct: log.correct_flags(),
            trace: log.trace.clone(),
            lattices: vec![
                lattice_snapshot(Side::Left, model.lattice(Side::Left))?,
                lattice_snapshot(Side::Right, model.lattice(Side::Right))?,
            ],
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TrialRunner;

    #[test]
    fn report_serializes_labels_and_lattices() {
        let config = ModelConfig::default();
        let mut model = MetaplasticityModel::new(&config).unwrap();
        let log = TrialRunner::new()
            .run(&mut model, &[Side::Left, Side::Right, Side::Left])
            .unwrap();
        let report = RunReport::new(&config, &log, &model).unwrap();
        assert_eq!(report.guesses.len(), 3);
        assert_eq!(report.lattices.len(), 2);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["summary"]["trials"], 3);
        assert_eq!(json["config"]["sigma"], 0.1);
        assert_eq!(json["lattices"][0]["side"], "left");
        assert_eq!(json["lattices"][1]["states"][0]["state"], "w4");
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn snapshot_totals_add_up() {
        let lattice = Lattice::new(100, Default::default()).unwrap();
        let snap = lattice_snapshot(Side::Right, &lattice).unwrap();
        assert_eq!(snap.strong_total + snap.weak_total, 800);
        assert_eq!(snap.states.iter().map(|s| s.count).sum::<u64>(), 800);
    }
}
