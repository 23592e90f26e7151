/// Streaming autocorrelation accumulator using a ring buffer.
///
/// Computes the normalized autocorrelation function Γ(δ) of a scalar time
/// series without storing the full history. Memory is O(max_lag).
#[derive(Debug, Clone)]
pub struct AutocorrAccum {
    max_lag: usize,
    /// Ring buffer of the most recent `max_lag` values.
    ring: Vec<f64>,
    sum_o: f64,
    sum_o2: f64,
    /// Running sum of o(t)·o(t−δ) for δ in 0..=max_lag.
    sum_prod: Vec<f64>,
    n_recorded: usize,
    ring_pos: usize,
}

impl AutocorrAccum {
    /// `max_lag` must be at least 1.
    pub fn new(max_lag: usize) -> Self {
        debug_assert!(max_lag >= 1);
        Self {
            max_lag,
            ring: vec![0.0; max_lag],
            sum_o: 0.0,
            sum_o2: 0.0,
            sum_prod: vec![0.0; max_lag + 1],
            n_recorded: 0,
            ring_pos: 0,
        }
    }

    pub fn push(&mut self, o: f64) {
        let ml = self.max_lag;
        let pos = self.ring_pos;
        self.sum_o += o;
        self.sum_o2 += o * o;
        self.sum_prod[0] += o * o;

        // ring[pos - δ] holds o(t − δ) for δ = 1..=min(n_recorded, ml)
        let n_back = self.n_recorded.min(ml);
        for delta in 1..=n_back {
            let idx = (pos + ml - delta) % ml;
            self.sum_prod[delta] += o * self.ring[idx];
        }
        self.ring[pos] = o;
        self.n_recorded += 1;
        self.ring_pos = (pos + 1) % ml;
    }

    pub fn n_recorded(&self) -> usize {
        self.n_recorded
    }

    /// Γ(δ) for δ = 0..=max_lag, with Γ(0) = 1.
    ///
    /// A constant series has no variance; it is reported as Γ = δ₀.
    pub fn finish(&self) -> Vec<f64> {
        let m = self.n_recorded as f64;
        let mean = if self.n_recorded > 0 { self.sum_o / m } else { 0.0 };
        let var = if self.n_recorded > 0 {
            self.sum_o2 / m - mean * mean
        } else {
            0.0
        };
        (0..=self.max_lag)
            .map(|delta| {
                let count = self.n_recorded.saturating_sub(delta) as f64;
                if count <= 0.0 || var <= 1e-15 {
                    return if delta == 0 { 1.0 } else { 0.0 };
                }
                (self.sum_prod[delta] / count - mean * mean) / var
            })
            .collect()
    }
}

/// Integrated autocorrelation time with Sokal's automatic window (c = 5).
pub fn sokal_tau(gamma: &[f64]) -> f64 {
    let mut tau = 0.5;
    for (w, &g) in gamma.iter().enumerate().skip(1) {
        tau += g;
        if w as f64 >= 5.0 * tau {
            return tau;
        }
    }
    tau
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_series() {
        let mut acc = AutocorrAccum::new(2);
        for t in 0..1000 {
            acc.push(if t % 2 == 0 { 1.0 } else { -1.0 });
        }
        let gamma = acc.finish();
        assert_eq!(gamma.len(), 3);
        assert!((gamma[0] - 1.0).abs() < 1e-12);
        assert!((gamma[1] + 1.0).abs() < 1e-12);
        assert!((gamma[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series() {
        let mut acc = AutocorrAccum::new(3);
        for _ in 0..10 {
            acc.push(0.7);
        }
        assert_eq!(acc.finish(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sokal_tau() {
        assert_eq!(sokal_tau(&[1.0]), 0.5);
        assert_eq!(sokal_tau(&[1.0, 0.0, 0.0, 0.0]), 0.5);
        // Γ(δ) = 0.5^δ: window closes once w ≥ 5τ
        let gamma: Vec<f64> = (0..50).map(|d| 0.5f64.powi(d)).collect();
        let tau = sokal_tau(&gamma);
        assert!((tau - 1.5).abs() < 1e-2, "tau = {tau}");
    }
}
