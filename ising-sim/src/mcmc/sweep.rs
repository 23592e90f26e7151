use crate::geometry::Lattice;
use crate::spins::energy::delta_energy;
use crate::spins::Beta;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

/// A single flip changes the energy by one of {-8, -4, 0, 4, 8}.
const N_DELTA: usize = 5;

#[inline]
fn delta_slot(delta_e: i32) -> usize {
    ((delta_e + 8) / 4) as usize
}

fn acceptance_table(p_flip: impl Fn(f64) -> f64) -> [f64; N_DELTA] {
    std::array::from_fn(|k| p_flip((4 * k as i32 - 8) as f64))
}

/// Heat-bath (Glauber) flip probability 1 / (1 + exp(β·ΔE)).
#[inline]
pub fn glauber_probability(beta: Beta, delta_e: f64) -> f64 {
    1.0 / (1.0 + (beta.value() * delta_e).exp())
}

/// Metropolis flip probability min(1, exp(−β·ΔE)).
#[inline]
pub fn metropolis_probability(beta: Beta, delta_e: f64) -> f64 {
    (-beta.value() * delta_e).exp().min(1.0)
}

/// Single-spin-flip pass over `sites` with a tabulated flip probability.
///
/// One uniform draw per visited site. Returns the number of accepted flips.
fn sweep_generic(
    lattice: &Lattice,
    spins: &mut [i8],
    rng: &mut Xoshiro256StarStar,
    sites: impl IntoIterator<Item = usize>,
    table: &[f64; N_DELTA],
) -> usize {
    let mut flips = 0;
    for i in sites {
        let p = table[delta_slot(delta_energy(lattice, spins, i))];
        if rng.gen::<f64>() < p {
            spins[i] = -spins[i];
            flips += 1;
        }
    }
    flips
}

/// Glauber sweep visiting `sites` in the given order.
pub fn glauber_sweep(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    rng: &mut Xoshiro256StarStar,
    sites: impl IntoIterator<Item = usize>,
) -> usize {
    let table = acceptance_table(|de| glauber_probability(beta, de));
    sweep_generic(lattice, spins, rng, sites, &table)
}

/// Metropolis sweep visiting `sites` in the given order.
pub fn metropolis_sweep(
    lattice: &Lattice,
    spins: &mut [i8],
    beta: Beta,
    rng: &mut Xoshiro256StarStar,
    sites: impl IntoIterator<Item = usize>,
) -> usize {
    let table = acceptance_table(|de| metropolis_probability(beta, de));
    sweep_generic(lattice, spins, rng, sites, &table)
}
