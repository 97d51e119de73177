//! Show one lattice's populations and its transition table.

use anyhow::Result;
use colored::Colorize;
use metaplast::prelude::*;

use super::{generate_trials, resolve_config};
use crate::RunOverrides;

pub fn run(overrides: &RunOverrides, side: Side, fresh: bool) -> Result<()> {
    let config = resolve_config(overrides)?;
    let mut model = MetaplasticityModel::new(&config.model)?;

    if !fresh {
        let trials = generate_trials(&config);
        TrialRunner::new().run(&mut model, &trials)?;
        println!(
            "{} {} lattice after {} {:?} trials",
            "→".blue(),
            side.to_string().cyan(),
            trials.len(),
            config.trials.pattern
        );
    } else {
        println!("{} fresh {} lattice", "→".blue(), side.to_string().cyan());
    }

    let lattice = model.lattice(side);
    let total = lattice.total().max(1) as f64;

    println!();
    println!("{}", "States".blue().bold());
    for entry in lattice.snapshot().iter().rev() {
        let share = entry.count as f64 / total;
        let bar = "█".repeat((share * 40.0).round() as usize);
        let label = if entry.state.is_strong() {
            entry.state.label().green()
        } else {
            entry.state.label().yellow()
        };
        println!("  {}  {:>6}  {}", label, entry.count, bar.dimmed());
    }
    println!(
        "  strong {} / weak {}  (fraction {:.3})",
        lattice.strong_total().to_string().green(),
        lattice.weak_total().to_string().yellow(),
        lattice.strong_fraction()?
    );

    let weights = lattice.weights();
    for plasticity in [Plasticity::Potentiation, Plasticity::Depression] {
        println!();
        println!("{}", format!("{:?} batch", plasticity).blue().bold());
        for &t in plasticity.order() {
            println!("  {:<8} {:?}  {:.4}", t.label(), t.family(), weights.get(t));
        }
    }

    Ok(())
}
