pub mod checkerboard;
pub mod sweep;

pub use checkerboard::{checkerboard_sweep, gibbs_sublattice_update};
pub use sweep::{glauber_sweep, metropolis_sweep};
