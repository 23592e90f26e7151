pub mod lattice;

pub use lattice::{Lattice, N_DIRECTIONS};
