use crate::geometry::Lattice;
use crate::spins::energy::local_field;
use crate::spins::{Beta, DOWN, UP};
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

/// P(s = +1 | h) = 1 / (1 + exp(−2βh)) for h ∈ {-4, -2, 0, 2, 4}.
fn heat_bath_table(beta: Beta) -> [f64; 5] {
    std::array::from_fn(|k| {
        let h = (2 * k as i32 - 4) as f64;
        1.0 / (1.0 + (-2.0 * beta.value() * h).exp())
    })
}

/// Resample every site of one color class from its exact conditional.
///
/// On a bipartite lattice no two sites of a class share a bond, so updating
/// them in place reads only the other, frozen class. The caller is
/// responsible for rejecting lattices where that does not hold.
pub fn gibbs_sublattice_update(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    color: bool,
    rng: &mut Xoshiro256StarStar,
) {
    debug_assert!(lattice.is_bipartite());
    let table = heat_bath_table(beta);
    for &i in lattice.sublattice_sites(color) {
        let h = local_field(lattice, spins, i);
        let p_up = table[((h + 4) / 2) as usize];
        spins[i] = if rng.gen::<f64>() < p_up { UP } else { DOWN };
    }
}

/// Both color classes, `true` first.
pub fn checkerboard_sweep(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    rng: &mut Xoshiro256StarStar,
) {
    gibbs_sublattice_update(lattice, spins, beta, true, rng);
    gibbs_sublattice_update(lattice, spins, beta, false, rng);
}
