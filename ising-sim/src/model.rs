use crate::clusters::{self, ClusterScratch};
use crate::config::{SweepOrder, UpdateRule};
use crate::error::{IsingError, Result};
use crate::geometry::Lattice;
use crate::mcmc;
use crate::spins::{self, energy, Beta, Snapshot};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Stateful 2D Ising simulator on an L×L torus.
///
/// Owns the spin configuration (±1 per site) and its PRNG. Every update
/// validates its arguments before touching the lattice, so a failed call
/// leaves the state exactly as it was, and every successful call runs to
/// completion before returning.
pub struct IsingModel {
    lattice: Lattice,
    spins: Vec<i8>,
    rng: Xoshiro256StarStar,
    seed: u64,
    // scratch
    order: Vec<usize>,
    cluster: ClusterScratch,
    /// Color class the next [`IsingModel::step`] Gibbs call updates.
    gibbs_phase: bool,
}

impl IsingModel {
    /// Random ±1 configuration, each site an independent fair coin.
    pub fn new(size: usize, seed: u64) -> Result<Self> {
        let lattice = Lattice::new(size)?;
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let spins = spins::random_spins(lattice.n_spins, &mut rng);
        debug!("created {size}x{size} Ising lattice (seed {seed})");
        Ok(Self::assemble(lattice, spins, rng, seed))
    }

    /// Start from a given configuration in row-major order.
    pub fn from_spins(size: usize, spins: Vec<i8>, seed: u64) -> Result<Self> {
        let lattice = Lattice::new(size)?;
        if spins.len() != lattice.n_spins {
            return Err(IsingError::InvalidArgument(format!(
                "expected {} spins for a {size}x{size} lattice, got {}",
                lattice.n_spins,
                spins.len()
            )));
        }
        spins::validate_spins(&spins)?;
        let rng = Xoshiro256StarStar::seed_from_u64(seed);
        Ok(Self::assemble(lattice, spins, rng, seed))
    }

    fn assemble(lattice: Lattice, spins: Vec<i8>, rng: Xoshiro256StarStar, seed: u64) -> Self {
        let n_spins = lattice.n_spins;
        Self {
            lattice,
            spins,
            rng,
            seed,
            order: (0..n_spins).collect(),
            cluster: ClusterScratch::new(n_spins),
            gibbs_phase: true,
        }
    }

    /// Reseed and redraw a random configuration; the lattice size is kept.
    pub fn reset(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
        self.spins = spins::random_spins(self.lattice.n_spins, &mut self.rng);
        self.seed = seed;
        self.gibbs_phase = true;
        debug!("reset {0}x{0} Ising lattice (seed {seed})", self.lattice.size);
    }

    pub fn size(&self) -> usize {
        self.lattice.size
    }

    pub fn n_spins(&self) -> usize {
        self.lattice.n_spins
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Row-major spin values.
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    pub fn spin(&self, row: usize, col: usize) -> i8 {
        self.spins[self.lattice.index(row, col)]
    }

    /// One Glauber sweep over all sites in row-major order.
    pub fn glauber_update(&mut self, beta: f64) -> Result<()> {
        self.glauber_update_with_order(beta, SweepOrder::Sequential)
            .map(|_| ())
    }

    /// One Glauber sweep in the given order. Returns the number of flips.
    pub fn glauber_update_with_order(&mut self, beta: f64, order: SweepOrder) -> Result<usize> {
        let beta = Beta::new(beta)?;
        let n_spins = self.lattice.n_spins;
        Ok(match order {
            SweepOrder::Sequential => {
                mcmc::glauber_sweep(&self.lattice, &mut self.spins, beta, &mut self.rng, 0..n_spins)
            }
            SweepOrder::Shuffled => {
                self.order.shuffle(&mut self.rng);
                let sites = self.order.iter().copied();
                mcmc::glauber_sweep(&self.lattice, &mut self.spins, beta, &mut self.rng, sites)
            }
        })
    }

    /// One Metropolis sweep in the given order. Returns the number of flips.
    ///
    /// Downhill moves are always accepted, so a row-major sweep is not
    /// ergodic on very small tori (L = 2, 3); use [`SweepOrder::Shuffled`]
    /// there.
    pub fn metropolis_update(&mut self, beta: f64, order: SweepOrder) -> Result<usize> {
        let beta = Beta::new(beta)?;
        let n_spins = self.lattice.n_spins;
        Ok(match order {
            SweepOrder::Sequential => mcmc::metropolis_sweep(
                &self.lattice,
                &mut self.spins,
                beta,
                &mut self.rng,
                0..n_spins,
            ),
            SweepOrder::Shuffled => {
                self.order.shuffle(&mut self.rng);
                let sites = self.order.iter().copied();
                mcmc::metropolis_sweep(&self.lattice, &mut self.spins, beta, &mut self.rng, sites)
            }
        })
    }

    /// Exact heat-bath resampling of one checkerboard class.
    ///
    /// `sublattice == true` updates the sites with even `row + col`. Requires
    /// a bipartite torus (even L, or L = 1).
    pub fn gibbs_update(&mut self, beta: f64, sublattice: bool) -> Result<()> {
        let beta = Beta::new(beta)?;
        self.require_bipartite()?;
        mcmc::gibbs_sublattice_update(
            &self.lattice,
            &mut self.spins,
            beta,
            sublattice,
            &mut self.rng,
        );
        Ok(())
    }

    /// One Wolff cluster flip. Returns the cluster size.
    pub fn wolff_update(&mut self, beta: f64) -> Result<usize> {
        let beta = Beta::new(beta)?;
        let size = clusters::wolff_update(
            &self.lattice,
            &mut self.spins,
            beta,
            &mut self.cluster,
            &mut self.rng,
        );
        trace!("wolff cluster of {size} sites flipped");
        Ok(size)
    }

    /// One Swendsen-Wang update. Returns the number of clusters.
    pub fn swendsen_wang_update(&mut self, beta: f64) -> Result<usize> {
        let beta = Beta::new(beta)?;
        let n_clusters =
            clusters::swendsen_wang_update(&self.lattice, &mut self.spins, beta, &mut self.rng);
        trace!("swendsen-wang update with {n_clusters} clusters");
        Ok(n_clusters)
    }

    /// One frame's worth of `rule`.
    ///
    /// Block Gibbs alternates the color class between calls, starting with
    /// `true`; the other rules are a single sweep or a single cluster move.
    pub fn step(&mut self, rule: UpdateRule, beta: f64) -> Result<()> {
        match rule {
            UpdateRule::Glauber => self.glauber_update(beta),
            UpdateRule::Metropolis => self
                .metropolis_update(beta, SweepOrder::Sequential)
                .map(|_| ()),
            UpdateRule::BlockGibbs => {
                self.gibbs_update(beta, self.gibbs_phase)?;
                self.gibbs_phase = !self.gibbs_phase;
                Ok(())
            }
            UpdateRule::Wolff => self.wolff_update(beta).map(|_| ()),
            UpdateRule::SwendsenWang => self.swendsen_wang_update(beta).map(|_| ()),
        }
    }

    /// One full sweep of `rule`: both Gibbs classes, or one pass/cluster move
    /// for the other rules. Single-spin rules visit sites in `order`.
    pub fn sweep(&mut self, rule: UpdateRule, beta: f64, order: SweepOrder) -> Result<()> {
        match rule {
            UpdateRule::Glauber => self.glauber_update_with_order(beta, order).map(|_| ()),
            UpdateRule::Metropolis => self.metropolis_update(beta, order).map(|_| ()),
            UpdateRule::BlockGibbs => {
                let beta = Beta::new(beta)?;
                self.require_bipartite()?;
                mcmc::checkerboard_sweep(&self.lattice, &mut self.spins, beta, &mut self.rng);
                Ok(())
            }
            UpdateRule::Wolff => self.wolff_update(beta).map(|_| ()),
            UpdateRule::SwendsenWang => self.swendsen_wang_update(beta).map(|_| ()),
        }
    }

    fn require_bipartite(&self) -> Result<()> {
        if self.lattice.is_bipartite() {
            Ok(())
        } else {
            Err(IsingError::InvalidArgument(format!(
                "block Gibbs needs an even lattice size, got {}",
                self.lattice.size
            )))
        }
    }

    /// Column-major copy for drawing. Does not touch the engine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.lattice, &self.spins)
    }

    pub fn energy(&self) -> i64 {
        energy::total_energy(&self.lattice, &self.spins)
    }

    pub fn energy_per_spin(&self) -> f64 {
        self.energy() as f64 / self.lattice.n_spins as f64
    }

    pub fn magnetization(&self) -> i64 {
        energy::magnetization(&self.spins)
    }

    pub fn magnetization_per_spin(&self) -> f64 {
        self.magnetization() as f64 / self.lattice.n_spins as f64
    }

    /// ΔE for flipping the site at `(row, col)`.
    pub fn delta_energy(&self, row: usize, col: usize) -> i32 {
        energy::delta_energy(&self.lattice, &self.spins, self.lattice.index(row, col))
    }
}
