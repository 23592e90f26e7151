use crate::geometry::{Lattice, N_DIRECTIONS};

/// Sum of the four neighbor spins of site `i`.
///
/// Self-bonds only occur on a 1×1 lattice; they contribute a constant to the
/// energy and are left out of the field.
#[inline]
pub fn local_field(lattice: &Lattice, spins: &[i8], i: usize) -> i32 {
    lattice
        .neighbors(i)
        .iter()
        .filter(|&&j| j != i)
        .map(|&j| spins[j] as i32)
        .sum()
}

/// Energy change from flipping site `i`: ΔE = 2·s_i·h_i (J = 1, no field).
#[inline]
pub fn delta_energy(lattice: &Lattice, spins: &[i8], i: usize) -> i32 {
    2 * spins[i] as i32 * local_field(lattice, spins, i)
}

/// Total energy E = −Σ_i Σ_d s_i·s_fwd(i,d), counting each forward bond once.
pub fn total_energy(lattice: &Lattice, spins: &[i8]) -> i64 {
    let mut total = 0i64;
    for i in 0..lattice.n_spins {
        let si = spins[i] as i64;
        for d in 0..N_DIRECTIONS {
            let j = lattice.neighbor(i, d, true);
            total += si * spins[j] as i64;
        }
    }
    -total
}

/// Σ s_i.
pub fn magnetization(spins: &[i8]) -> i64 {
    spins.iter().map(|&s| s as i64).sum()
}
