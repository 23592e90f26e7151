pub mod energy;
pub mod snapshot;

pub use snapshot::Snapshot;

use crate::error::{IsingError, Result};
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

pub const UP: i8 = 1;
pub const DOWN: i8 = -1;

/// Inverse temperature β = 1/T, validated at the call boundary.
///
/// Any finite, non-negative value is accepted. β = 0 is the infinite
/// temperature limit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Beta(f64);

impl Beta {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(IsingError::InvalidArgument("beta must not be NaN".to_string()));
        }
        if !value.is_finite() {
            return Err(IsingError::InvalidArgument(format!(
                "beta must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(IsingError::InvalidArgument(format!(
                "beta must be non-negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// β from a temperature T > 0.
    pub fn from_temperature(temperature: f64) -> Result<Self> {
        if !(temperature > 0.0) {
            return Err(IsingError::InvalidArgument(format!(
                "temperature must be positive, got {temperature}"
            )));
        }
        Self::new(1.0 / temperature)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Beta {
    type Error = IsingError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Independent fair coin per site.
pub fn random_spins(n_spins: usize, rng: &mut Xoshiro256StarStar) -> Vec<i8> {
    (0..n_spins)
        .map(|_| if rng.gen::<f64>() < 0.5 { DOWN } else { UP })
        .collect()
}

/// Check that every value is exactly one of the two spin states.
pub fn validate_spins(spins: &[i8]) -> Result<()> {
    match spins.iter().position(|&s| s != UP && s != DOWN) {
        Some(i) => Err(IsingError::InvalidArgument(format!(
            "spin at site {i} is {}, expected +1 or -1",
            spins[i]
        ))),
        None => Ok(()),
    }
}
