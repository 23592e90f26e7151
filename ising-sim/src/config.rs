use crate::error::IsingError;
use validator::{Validate, ValidationError};

/// Monte Carlo update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRule {
    Glauber,
    Metropolis,
    BlockGibbs,
    Wolff,
    SwendsenWang,
}

impl TryFrom<&str> for UpdateRule {
    type Error = IsingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glauber" => Ok(Self::Glauber),
            "metropolis" => Ok(Self::Metropolis),
            "block gibbs" | "block-gibbs" | "gibbs" => Ok(Self::BlockGibbs),
            "wolff" => Ok(Self::Wolff),
            "swendsen-wang" | "swendsen wang" | "sw" => Ok(Self::SwendsenWang),
            _ => Err(IsingError::InvalidArgument(format!(
                "unknown update rule '{s}', expected 'Glauber', 'Metropolis', 'Block Gibbs', 'Wolff' or 'Swendsen-Wang'"
            ))),
        }
    }
}

/// Site visiting order for single-spin-flip sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepOrder {
    /// Row-major, site 0 to L² − 1.
    #[default]
    Sequential,
    /// A fresh uniform permutation per sweep, drawn from the engine RNG.
    Shuffled,
}

impl TryFrom<&str> for SweepOrder {
    type Error = IsingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "shuffled" | "random" => Ok(Self::Shuffled),
            _ => Err(IsingError::InvalidArgument(format!(
                "unknown sweep order '{s}', expected 'sequential' or 'shuffled'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterMode {
    Wolff,
    Sw,
}

impl TryFrom<&str> for ClusterMode {
    type Error = IsingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "wolff" => Ok(Self::Wolff),
            "sw" => Ok(Self::Sw),
            _ => Err(IsingError::InvalidArgument(format!(
                "unknown cluster mode '{s}', expected 'wolff' or 'sw'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub interval: usize,
    pub mode: ClusterMode,
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.n_sweeps < 1 {
        return Err(ValidationError::new("n_sweeps must be >= 1"));
    }
    if cfg.warmup_sweeps > cfg.n_sweeps {
        return Err(ValidationError::new("warmup_sweeps must be <= n_sweeps"));
    }
    if !cfg.beta.is_finite() || cfg.beta < 0.0 {
        return Err(ValidationError::new("beta must be finite and >= 0"));
    }
    if let Some(ref c) = cfg.cluster_update {
        if c.interval < 1 {
            return Err(ValidationError::new("cluster_update interval must be >= 1"));
        }
    }
    if cfg.autocorrelation_max_lag == Some(0) {
        return Err(ValidationError::new("autocorrelation_max_lag must be >= 1"));
    }
    Ok(())
}

/// Settings for [`run_sweep_loop`](crate::simulation::run_sweep_loop).
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    pub beta: f64,
    pub n_sweeps: usize,
    pub warmup_sweeps: usize,
    pub update_rule: UpdateRule,
    pub sweep_order: SweepOrder,
    pub cluster_update: Option<ClusterConfig>,
    pub autocorrelation_max_lag: Option<usize>,
}

impl SimConfig {
    /// `n_sweeps` sweeps of `update_rule` at `beta`, a quarter of them warmup.
    pub fn new(beta: f64, n_sweeps: usize, update_rule: UpdateRule) -> Self {
        Self {
            beta,
            n_sweeps,
            warmup_sweeps: n_sweeps / 4,
            update_rule,
            sweep_order: SweepOrder::default(),
            cluster_update: None,
            autocorrelation_max_lag: None,
        }
    }

    pub(crate) fn check(&self) -> crate::error::Result<()> {
        self.validate()
            .map_err(|e| IsingError::InvalidConfig(format!("{e}")))
    }
}
