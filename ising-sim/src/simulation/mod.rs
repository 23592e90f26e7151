use crate::config::{ClusterMode, SimConfig};
use crate::error::Result;
use crate::model::IsingModel;
use crate::statistics::{AutocorrAccum, Statistics, SweepResult};
use log::debug;

/// Run the full Monte Carlo loop (warmup + measurement) on `model`.
///
/// Each sweep consists of:
/// 1. A full pass of `update_rule` (both color classes for block Gibbs)
/// 2. An optional cluster update (every `cluster_update.interval` sweeps)
/// 3. Measurement (after `warmup_sweeps`)
///
/// `on_sweep` is called once per sweep. The config is validated before the
/// model is touched.
pub fn run_sweep_loop(
    model: &mut IsingModel,
    config: &SimConfig,
    on_sweep: &dyn Fn(),
) -> Result<SweepResult> {
    config.check()?;

    let n_spins = model.n_spins();
    let n_sweeps = config.n_sweeps;
    let warmup_sweeps = config.warmup_sweeps;
    let beta = config.beta;

    let mut mag_stat = Statistics::new(1);
    let mut abs_mag_stat = Statistics::new(1);
    let mut mag2_stat = Statistics::new(2);
    let mut mag4_stat = Statistics::new(4);
    let mut energy_stat = Statistics::new(1);
    let mut energy2_stat = Statistics::new(2);
    let mut cluster_stat = Statistics::new(1);

    let n_measurement_sweeps = n_sweeps - warmup_sweeps;
    let ac_max_lag = config
        .autocorrelation_max_lag
        .map(|k| k.min(n_measurement_sweeps / 4).max(1));
    let mut m2_accum = ac_max_lag.map(AutocorrAccum::new);

    debug!(
        "sampling {0}x{0} lattice at beta={beta}: {n_sweeps} sweeps ({warmup_sweeps} warmup) of {1:?}",
        model.size(),
        config.update_rule
    );

    for sweep_id in 0..n_sweeps {
        model.sweep(config.update_rule, beta, config.sweep_order)?;

        if let Some(ref c) = config.cluster_update {
            if sweep_id % c.interval == 0 {
                let size = match c.mode {
                    ClusterMode::Wolff => model.wolff_update(beta)? as f64,
                    ClusterMode::Sw => n_spins as f64 / model.swendsen_wang_update(beta)? as f64,
                };
                cluster_stat.update(size);
            }
        }

        if sweep_id >= warmup_sweeps {
            let m = model.magnetization_per_spin();
            let e = model.energy_per_spin();
            mag_stat.update(m);
            abs_mag_stat.update(m.abs());
            mag2_stat.update(m);
            mag4_stat.update(m);
            energy_stat.update(e);
            energy2_stat.update(e);
            if let Some(ref mut acc) = m2_accum {
                acc.push(m * m);
            }
        }

        on_sweep();
    }

    Ok(SweepResult {
        beta,
        n_spins,
        n_measurements: mag_stat.count,
        mag: mag_stat.average(),
        abs_mag: abs_mag_stat.average(),
        mag2: mag2_stat.average(),
        mag4: mag4_stat.average(),
        energy: energy_stat.average(),
        energy2: energy2_stat.average(),
        mean_cluster_size: (cluster_stat.count > 0).then(|| cluster_stat.average()),
        mags2_autocorrelation: m2_accum.map_or_else(Vec::new, |acc| acc.finish()),
    })
}
