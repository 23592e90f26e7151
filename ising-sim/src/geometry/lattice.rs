use crate::error::{IsingError, Result};

/// Forward directions per site: 0 = down (row + 1), 1 = right (col + 1).
pub const N_DIRECTIONS: usize = 2;

/// Periodic L×L square lattice with precomputed neighbor table.
///
/// Sites are indexed in row-major order, `i = row * size + col`. Every site
/// has two forward neighbors (down, right) and two backward neighbors (up,
/// left), all wrapping at the edges. Sites are also split into two color
/// classes by the parity of `row + col`; `color(i) == true` is the class that
/// contains the origin.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Side length L.
    pub size: usize,
    /// Total number of sites (L²).
    pub n_spins: usize,
    /// Layout: `neighbors[(i * N_DIRECTIONS + d) * 2 + dir]`, `dir = 0` forward,
    /// `dir = 1` backward.
    neighbors: Vec<u32>,
    even_sites: Vec<usize>,
    odd_sites: Vec<usize>,
}

impl Lattice {
    /// Build the lattice for side length `size`. Fails for `size == 0`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(IsingError::InvalidArgument(
                "lattice size must be a positive integer, got 0".to_string(),
            ));
        }
        let n_spins = size
            .checked_mul(size)
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or_else(|| {
                IsingError::InvalidArgument(format!("lattice size {size} is too large"))
            })?;

        let mut neighbors = vec![0u32; n_spins * N_DIRECTIONS * 2];
        let mut even_sites = Vec::with_capacity(n_spins / 2 + 1);
        let mut odd_sites = Vec::with_capacity(n_spins / 2);

        for i in 0..n_spins {
            let (row, col) = (i / size, i % size);
            let up = (row + size - 1) % size;
            let down = (row + 1) % size;
            let left = (col + size - 1) % size;
            let right = (col + 1) % size;

            let base = i * N_DIRECTIONS * 2;
            neighbors[base] = (down * size + col) as u32;
            neighbors[base + 1] = (up * size + col) as u32;
            neighbors[base + 2] = (row * size + right) as u32;
            neighbors[base + 3] = (row * size + left) as u32;

            if (row + col) % 2 == 0 {
                even_sites.push(i);
            } else {
                odd_sites.push(i);
            }
        }

        Ok(Self {
            size,
            n_spins,
            neighbors,
            even_sites,
            odd_sites,
        })
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i / self.size, i % self.size)
    }

    /// Neighbor of site `i` in direction `dim`; `forward = false` walks the
    /// opposite way.
    #[inline]
    pub fn neighbor(&self, i: usize, dim: usize, forward: bool) -> usize {
        self.neighbors[(i * N_DIRECTIONS + dim) * 2 + (!forward as usize)] as usize
    }

    /// All four neighbors of `i`: down, up, right, left.
    #[inline]
    pub fn neighbors(&self, i: usize) -> [usize; 4] {
        let base = i * N_DIRECTIONS * 2;
        [
            self.neighbors[base] as usize,
            self.neighbors[base + 1] as usize,
            self.neighbors[base + 2] as usize,
            self.neighbors[base + 3] as usize,
        ]
    }

    /// Checkerboard color of site `i`: `true` when `row + col` is even.
    #[inline]
    pub fn color(&self, i: usize) -> bool {
        let (row, col) = self.coords(i);
        (row + col) % 2 == 0
    }

    /// Sites of one color class, in row-major order.
    pub fn sublattice_sites(&self, color: bool) -> &[usize] {
        if color {
            &self.even_sites
        } else {
            &self.odd_sites
        }
    }

    /// True when no two distinct sites of the same color are adjacent. On a
    /// torus this holds for even L and for the single-site lattice.
    pub fn is_bipartite(&self) -> bool {
        self.size % 2 == 0 || self.size == 1
    }
}
