pub mod clusters;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod model;
pub mod simulation;
pub mod spins;
pub mod statistics;

pub use config::{ClusterConfig, ClusterMode, SimConfig, SweepOrder, UpdateRule};
pub use error::{IsingError, Result};
pub use geometry::Lattice;
pub use model::IsingModel;
pub use simulation::run_sweep_loop;
pub use spins::{Beta, Snapshot};
pub use statistics::SweepResult;
