use super::utils::{grow_cluster, uf_roots};
use super::ClusterScratch;
use crate::geometry::Lattice;
use crate::spins::Beta;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

/// Fortuin-Kasteleyn bond activation probability for J = 1: 1 − exp(−2β).
#[inline]
pub fn bond_probability(beta: Beta) -> f64 {
    -(-2.0 * beta.value()).exp_m1()
}

/// Grow the Wolff cluster around `seed` without flipping it.
///
/// Each bond from a cluster site to a not-yet-included neighbor with the
/// seed's spin is activated with [`bond_probability`]. Membership is left in
/// `scratch.in_cluster`; the return value is the cluster size.
pub fn grow_wolff_cluster(
    lattice: &Lattice,
    spins: &[i8],
    beta: Beta,
    seed: usize,
    scratch: &mut ClusterScratch,
    rng: &mut Xoshiro256StarStar,
) -> usize {
    scratch.clear();
    let p_add = bond_probability(beta);
    let seed_spin = spins[seed];
    grow_cluster(
        lattice,
        seed,
        &mut scratch.in_cluster,
        &mut scratch.stack,
        |_, nb| spins[nb] == seed_spin && rng.gen::<f64>() < p_add,
    )
}

/// Wolff single-cluster update: uniform seed, grow, flip the whole cluster.
///
/// Returns the number of flipped sites (1 ≤ size ≤ L²).
pub fn wolff_update(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    scratch: &mut ClusterScratch,
    rng: &mut Xoshiro256StarStar,
) -> usize {
    let seed = rng.gen_range(0..lattice.n_spins);
    let size = grow_wolff_cluster(lattice, spins, beta, seed, scratch, rng);

    for (s, &inside) in spins.iter_mut().zip(scratch.in_cluster.iter()) {
        if inside {
            *s = -*s;
        }
    }
    size
}

/// Swendsen-Wang update: activate FK bonds over the whole lattice, then flip
/// each cluster independently with probability ½.
///
/// Returns the number of clusters.
pub fn swendsen_wang_update(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    rng: &mut Xoshiro256StarStar,
) -> usize {
    let n_spins = lattice.n_spins;
    let p_add = bond_probability(beta);

    let roots = {
        let frozen: &[i8] = spins;
        uf_roots(lattice, |i, j| {
            frozen[i] == frozen[j] && rng.gen::<f64>() < p_add
        })
    };

    let mut n_clusters = 0;
    let mut flip_decision = vec![2u8; n_spins]; // 2 = undecided
    for i in 0..n_spins {
        let root = roots[i] as usize;
        if flip_decision[root] == 2 {
            flip_decision[root] = u8::from(rng.gen::<f64>() < 0.5);
            n_clusters += 1;
        }
        if flip_decision[root] == 1 {
            spins[i] = -spins[i];
        }
    }
    n_clusters
}
