/// Observables averaged over the measurement sweeps of one run.
///
/// `m` is the magnetization per spin and `e` the energy per spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub beta: f64,
    pub n_spins: usize,
    /// Sweeps that contributed to the averages (n_sweeps − warmup).
    pub n_measurements: usize,
    /// ⟨m⟩.
    pub mag: f64,
    /// ⟨|m|⟩.
    pub abs_mag: f64,
    /// ⟨m²⟩.
    pub mag2: f64,
    /// ⟨m⁴⟩.
    pub mag4: f64,
    /// ⟨e⟩.
    pub energy: f64,
    /// ⟨e²⟩.
    pub energy2: f64,
    /// Mean cluster size over the cluster updates (sites per Wolff cluster,
    /// or L² / cluster count for Swendsen-Wang).
    /// `None` when no cluster update ran.
    pub mean_cluster_size: Option<f64>,
    /// Normalized autocorrelation Γ(δ) of m², length max_lag + 1.
    /// Empty if autocorrelation_max_lag is None.
    pub mags2_autocorrelation: Vec<f64>,
}

impl SweepResult {
    /// Binder cumulant U = 1 − ⟨m⁴⟩ / (3⟨m²⟩²); NaN with no magnetization.
    pub fn binder_cumulant(&self) -> f64 {
        if self.mag2 == 0.0 {
            return f64::NAN;
        }
        1.0 - self.mag4 / (3.0 * self.mag2 * self.mag2)
    }

    /// Specific heat per spin β²N(⟨e²⟩ − ⟨e⟩²).
    pub fn specific_heat(&self) -> f64 {
        self.beta * self.beta * self.n_spins as f64 * (self.energy2 - self.energy * self.energy)
    }

    /// Susceptibility βN(⟨m²⟩ − ⟨|m|⟩²).
    pub fn susceptibility(&self) -> f64 {
        self.beta * self.n_spins as f64 * (self.mag2 - self.abs_mag * self.abs_mag)
    }

    /// Sokal integrated autocorrelation time of m², if it was tracked.
    pub fn mags2_tau(&self) -> Option<f64> {
        if self.mags2_autocorrelation.is_empty() {
            None
        } else {
            Some(super::sokal_tau(&self.mags2_autocorrelation))
        }
    }
}
