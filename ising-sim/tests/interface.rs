//! Call-boundary behavior: argument checks, snapshots, determinism.

use ising_sim::config::{SweepOrder, UpdateRule};
use ising_sim::{IsingError, IsingModel};

const BAD_BETAS: [f64; 4] = [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

#[test]
fn test_zero_size_is_rejected() {
    assert!(matches!(
        IsingModel::new(0, 1),
        Err(IsingError::InvalidArgument(_))
    ));
}

#[test]
fn test_bad_beta_leaves_state_unchanged() {
    let mut model = IsingModel::new(8, 2).unwrap();
    let before = model.snapshot();

    for beta in BAD_BETAS {
        let results = [
            model.glauber_update(beta),
            model.glauber_update_with_order(beta, SweepOrder::Shuffled).map(|_| ()),
            model.metropolis_update(beta, SweepOrder::Sequential).map(|_| ()),
            model.gibbs_update(beta, true),
            model.gibbs_update(beta, false),
            model.wolff_update(beta).map(|_| ()),
            model.swendsen_wang_update(beta).map(|_| ()),
            model.step(UpdateRule::BlockGibbs, beta),
        ];
        for result in results {
            assert!(
                matches!(result, Err(IsingError::InvalidArgument(_))),
                "beta = {beta}: {result:?}"
            );
        }
    }
    assert_eq!(model.snapshot(), before);

    // the RNG was not advanced either
    let mut fresh = IsingModel::new(8, 2).unwrap();
    model.glauber_update(0.4).unwrap();
    fresh.glauber_update(0.4).unwrap();
    assert_eq!(model.spins(), fresh.spins());
}

#[test]
fn test_snapshot_is_idempotent() {
    let model = IsingModel::new(9, 3).unwrap();
    let a = model.snapshot();
    let b = model.snapshot();
    assert_eq!(a, b);
    assert_eq!(a.size(), 9);
    for col in 0..9 {
        for row in 0..9 {
            assert_eq!(a.is_filled(col, row), model.spin(row, col) == 1);
        }
    }
}

#[test]
fn test_end_to_end_4x4() {
    let mut model = IsingModel::new(4, 4).unwrap();
    model.glauber_update(0.001).unwrap();
    let snap = model.snapshot();
    assert_eq!(snap.columns().len(), 4);
    assert!(snap.columns().iter().all(|col| col.len() == 4));
    assert_eq!(snap.len(), 16);
    let spins = snap.to_spins();
    assert!(spins.iter().flatten().all(|&s| s == 1 || s == -1));
}

#[test]
fn test_single_site_lattice() {
    let mut model = IsingModel::new(1, 5).unwrap();
    assert_eq!(model.delta_energy(0, 0), 0);
    model.glauber_update(1.0).unwrap();
    model.gibbs_update(1.0, true).unwrap();
    model.gibbs_update(1.0, false).unwrap();
    assert_eq!(model.wolff_update(1.0).unwrap(), 1);
    assert_eq!(model.snapshot().len(), 1);
}

#[test]
fn test_identical_seeds_identical_runs() {
    let run = |seed| {
        let mut model = IsingModel::new(10, seed).unwrap();
        for _ in 0..20 {
            model.glauber_update(0.4).unwrap();
            model.gibbs_update(0.4, true).unwrap();
            model.wolff_update(0.4).unwrap();
            model.swendsen_wang_update(0.4).unwrap();
            model.metropolis_update(0.4, SweepOrder::Shuffled).unwrap();
        }
        model.snapshot()
    };
    assert_eq!(run(77), run(77));
    assert_ne!(run(77), run(78));
}

#[test]
fn test_rule_names_drive_step() {
    let mut model = IsingModel::new(6, 6).unwrap();
    for name in ["Glauber", "Block Gibbs", "Wolff", "metropolis", "sw"] {
        let rule = UpdateRule::try_from(name).unwrap();
        model.step(rule, 0.3).unwrap();
    }
    assert!(UpdateRule::try_from("Kawasaki").is_err());
}
