use ising_sim::spins::energy::{delta_energy, total_energy};
use ising_sim::{IsingModel, Lattice};
use proptest::prelude::*;

proptest! {
    #[test]
    fn snapshot_matches_spins(size in 1usize..12, seed in any::<u64>()) {
        let model = IsingModel::new(size, seed).unwrap();
        let snap = model.snapshot();
        prop_assert_eq!(snap.size(), size);
        prop_assert_eq!(snap.len(), size * size);

        let n = (size * size) as i64;
        let up = snap.filled_count() as i64;
        prop_assert_eq!(2 * up - n, model.magnetization());
        prop_assert!(model.energy().abs() <= 2 * n);
    }

    #[test]
    fn delta_energy_matches_flip(
        size in 1usize..9,
        seed in any::<u64>(),
        site in any::<prop::sample::Index>(),
    ) {
        let model = IsingModel::new(size, seed).unwrap();
        let lattice = Lattice::new(size).unwrap();
        let i = site.index(size * size);
        let mut spins = model.spins().to_vec();

        let before = total_energy(&lattice, &spins);
        let de = delta_energy(&lattice, &spins, i);
        spins[i] = -spins[i];
        prop_assert_eq!(total_energy(&lattice, &spins) - before, de as i64);
    }

    #[test]
    fn wolff_moves_magnetization_by_cluster(
        size in 1usize..10,
        seed in any::<u64>(),
        beta in 0.0f64..2.0,
    ) {
        let mut model = IsingModel::new(size, seed).unwrap();
        let m0 = model.magnetization();
        let cluster = model.wolff_update(beta).unwrap() as i64;
        prop_assert_eq!((model.magnetization() - m0).abs(), 2 * cluster);
    }

    #[test]
    fn updates_keep_spins_valid(
        size in 1usize..8,
        seed in any::<u64>(),
        beta in 0.0f64..3.0,
    ) {
        let mut model = IsingModel::new(size, seed).unwrap();
        model.glauber_update(beta).unwrap();
        model.swendsen_wang_update(beta).unwrap();
        if model.lattice().is_bipartite() {
            model.gibbs_update(beta, seed % 2 == 0).unwrap();
        } else {
            prop_assert!(model.gibbs_update(beta, true).is_err());
        }
        prop_assert!(model.spins().iter().all(|&s| s == 1 || s == -1));
    }
}
