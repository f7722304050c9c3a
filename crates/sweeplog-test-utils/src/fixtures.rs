//! Metric functions for driving test sweeps.
//!
//! - [`QuadraticBowl`]: weighted squared distance to a known minimum.
//! - [`NoisyMetric`]: a bowl plus seeded uniform noise, reproducible
//!   across runs.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `sum_i weights[i] * (p[i] - minimum[i])^2`.
#[derive(Clone, Debug)]
pub struct QuadraticBowl {
    pub minimum: Vec<f64>,
    pub weights: Vec<f64>,
}

impl QuadraticBowl {
    /// Unit-weight bowl centered on `minimum`.
    pub fn new(minimum: Vec<f64>) -> Self {
        let weights = vec![1.0; minimum.len()];
        Self { minimum, weights }
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    pub fn evaluate(&self, position: &[f64]) -> f64 {
        position
            .iter()
            .zip(&self.minimum)
            .zip(&self.weights)
            .map(|((&p, &m), &w)| w * (p - m) * (p - m))
            .sum()
    }
}

/// A [`QuadraticBowl`] with additive noise in `[-amplitude, amplitude)`.
pub struct NoisyMetric {
    pub bowl: QuadraticBowl,
    pub amplitude: f64,
    rng: ChaCha8Rng,
}

impl NoisyMetric {
    pub fn new(bowl: QuadraticBowl, amplitude: f64, seed: u64) -> Self {
        Self {
            bowl,
            amplitude,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn evaluate(&mut self, position: &[f64]) -> f64 {
        let unit = (self.rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        self.bowl.evaluate(position) + self.amplitude * (2.0 * unit - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowl_is_zero_at_minimum() {
        let bowl = QuadraticBowl::new(vec![1.0, -2.0]);
        assert_eq!(bowl.evaluate(&[1.0, -2.0]), 0.0);
        assert_eq!(bowl.evaluate(&[2.0, -2.0]), 1.0);
    }

    #[test]
    fn bowl_weights_scale_axes() {
        let bowl = QuadraticBowl::new(vec![0.0, 0.0]).with_weights(vec![1.0, 4.0]);
        assert_eq!(bowl.evaluate(&[1.0, 1.0]), 5.0);
    }

    #[test]
    fn noise_is_bounded_and_seeded() {
        let bowl = QuadraticBowl::new(vec![0.0]);
        let mut a = NoisyMetric::new(bowl.clone(), 0.1, 7);
        let mut b = NoisyMetric::new(bowl, 0.1, 7);
        for i in 0..100 {
            let p = [i as f64 * 0.01];
            let va = a.evaluate(&p);
            assert_eq!(va, b.evaluate(&p));
            let base = p[0] * p[0];
            assert!((va - base).abs() <= 0.1);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let bowl = QuadraticBowl::new(vec![0.0]);
        let mut a = NoisyMetric::new(bowl.clone(), 1.0, 1);
        let mut b = NoisyMetric::new(bowl, 1.0, 2);
        let va: Vec<f64> = (0..8).map(|_| a.evaluate(&[0.0])).collect();
        let vb: Vec<f64> = (0..8).map(|_| b.evaluate(&[0.0])).collect();
        assert_ne!(va, vb);
    }
}
