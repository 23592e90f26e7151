use std::time::Instant;

use ising_sim::config::*;
use ising_sim::{run_sweep_loop, IsingModel};

const L: usize = 128;
const N_SWEEPS: usize = 200;
const BETA: f64 = 0.4406868; // ln(1 + √2) / 2

fn main() {
    println!(
        "Lattice: {}x{}  |  Sweeps: {}  |  beta: {}",
        L, L, N_SWEEPS, BETA
    );
    println!("{}", "-".repeat(70));

    let rules = [
        UpdateRule::Glauber,
        UpdateRule::Metropolis,
        UpdateRule::BlockGibbs,
        UpdateRule::Wolff,
        UpdateRule::SwendsenWang,
    ];

    for (r, rule) in rules.into_iter().enumerate() {
        let mut model = IsingModel::new(L, 42 + r as u64).unwrap();
        let mut config = SimConfig::new(BETA, N_SWEEPS, rule);
        config.warmup_sweeps = 0;

        let t0 = Instant::now();
        let result = run_sweep_loop(&mut model, &config, &|| {}).unwrap();
        let elapsed = t0.elapsed().as_secs_f64();

        let per_sweep = elapsed / N_SWEEPS as f64 * 1000.0;
        println!(
            "{:<14} {:.3} s  |  {:.3} ms/sweep  |  <|m|> = {:.3}  <e> = {:.3}",
            format!("{rule:?}"),
            elapsed,
            per_sweep,
            result.abs_mag,
            result.energy
        );
    }
}
