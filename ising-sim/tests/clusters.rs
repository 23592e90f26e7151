use std::collections::{HashSet, VecDeque};

use ising_sim::clusters::{grow_wolff_cluster, ClusterScratch};
use ising_sim::{Beta, IsingModel, Lattice};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Every member is reachable from `start` through members only.
fn is_connected(lattice: &Lattice, members: &HashSet<usize>, start: usize) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(site) = queue.pop_front() {
        for nb in lattice.neighbors(site) {
            if members.contains(&nb) && seen.insert(nb) {
                queue.push_back(nb);
            }
        }
    }
    seen.len() == members.len()
}

#[test]
fn test_wolff_cluster_is_connected_and_uniform() {
    let model = IsingModel::new(20, 31).unwrap();
    let lattice = model.lattice();
    let spins = model.spins();
    let beta = Beta::new(0.44).unwrap();
    let mut scratch = ClusterScratch::new(lattice.n_spins);
    let mut rng = Xoshiro256StarStar::seed_from_u64(5);

    for _ in 0..200 {
        let seed = rng.gen_range(0..lattice.n_spins);
        let size = grow_wolff_cluster(lattice, spins, beta, seed, &mut scratch, &mut rng);
        let members: HashSet<usize> = scratch.members().into_iter().collect();

        assert_eq!(members.len(), size);
        assert!(members.contains(&seed));
        assert!(members.iter().all(|&i| spins[i] == spins[seed]));
        assert!(is_connected(lattice, &members, seed));
    }
}

#[test]
fn test_wolff_update_flips_exactly_one_cluster() {
    let mut model = IsingModel::new(16, 32).unwrap();
    for _ in 0..100 {
        let before = model.spins().to_vec();
        let size = model.wolff_update(0.5).unwrap();

        let changed: HashSet<usize> = (0..model.n_spins())
            .filter(|&i| before[i] != model.spins()[i])
            .collect();
        assert_eq!(changed.len(), size);
        assert!(size >= 1);

        let start = *changed.iter().next().unwrap();
        assert!(changed.iter().all(|&i| before[i] == before[start]));
        assert!(is_connected(model.lattice(), &changed, start));
    }
}

#[test]
fn test_cluster_updates_at_zero_beta() {
    let mut model = IsingModel::new(10, 33).unwrap();
    for _ in 0..20 {
        assert_eq!(model.wolff_update(0.0).unwrap(), 1);
        assert_eq!(model.swendsen_wang_update(0.0).unwrap(), 100);
    }
}
