pub mod fk;
mod utils;

pub use fk::{bond_probability, grow_wolff_cluster, swendsen_wang_update, wolff_update};

/// Reusable buffers for single-cluster growth, sized to the lattice.
#[derive(Debug, Clone)]
pub struct ClusterScratch {
    pub in_cluster: Vec<bool>,
    pub stack: Vec<usize>,
}

impl ClusterScratch {
    pub fn new(n_spins: usize) -> Self {
        Self {
            in_cluster: vec![false; n_spins],
            stack: Vec::with_capacity(n_spins),
        }
    }

    pub fn clear(&mut self) {
        self.in_cluster.fill(false);
        self.stack.clear();
    }

    /// Sites of the most recently grown cluster, ascending.
    pub fn members(&self) -> Vec<usize> {
        self.in_cluster
            .iter()
            .enumerate()
            .filter_map(|(i, &inside)| inside.then_some(i))
            .collect()
    }
}
