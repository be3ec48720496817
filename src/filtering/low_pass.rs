//! Single-channel exponential smoothing

use std::f64::consts::PI;

/// Smoothing coefficient for a first-order low-pass at `cutoff` Hz sampled at `rate` Hz.
///
/// `tau = 1 / (2*pi*cutoff)`, `te = 1 / rate`, `alpha = 1 / (1 + tau/te)`.
/// Strictly inside (0, 1) for positive inputs; exactly 0 when `cutoff` is 0.
pub fn smoothing_factor(cutoff: f64, rate: f64) -> f64 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    let te = 1.0 / rate;
    1.0 / (1.0 + tau / te)
}

/// Exponential low-pass filter with a caller-supplied coefficient.
///
/// The first sample passes through unchanged and seeds the history, so
/// there is no transient from an all-zero initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassFilter {
    alpha: f64,
    last_raw: f64,
    last_filtered: f64,
    initialized: bool,
}

impl LowPassFilter {
    /// Create a filter with no history. The stored alpha starts at 1.0
    pub fn new() -> Self {
        Self::with_alpha(1.0)
    }

    /// Create a filter with no history and an initial stored alpha
    pub fn with_alpha(alpha: f64) -> Self {
        LowPassFilter {
            alpha,
            last_raw: 0.0,
            last_filtered: 0.0,
            initialized: false,
        }
    }

    /// Filter `value` with the stored alpha
    pub fn filter(&mut self, value: f64) -> f64 {
        let filtered = if self.initialized {
            self.alpha * value + (1.0 - self.alpha) * self.last_filtered
        } else {
            self.initialized = true;
            value
        };

        self.last_raw = value;
        self.last_filtered = filtered;
        filtered
    }

    /// Store `alpha` and filter `value` with it
    pub fn filter_with_alpha(&mut self, value: f64, alpha: f64) -> f64 {
        self.alpha = alpha;
        self.filter(value)
    }

    /// Filter `value` with the alpha of a `cutoff` Hz low-pass sampled at `rate` Hz
    pub fn filter_with_cutoff(&mut self, value: f64, cutoff: f64, rate: f64) -> f64 {
        self.filter_with_alpha(value, smoothing_factor(cutoff, rate))
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn has_last_raw_value(&self) -> bool {
        self.initialized
    }

    /// Last filtered output, 0.0 before the first sample
    pub fn last_value(&self) -> f64 {
        self.last_filtered
    }

    /// Last raw input, 0.0 before the first sample
    pub fn last_raw_value(&self) -> f64 {
        self.last_raw
    }

    /// Forget the history; the stored alpha is kept
    pub fn reset(&mut self) {
        *self = Self::with_alpha(self.alpha);
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_passes_through() {
        let mut filter = LowPassFilter::with_alpha(0.1);
        assert!(!filter.has_last_raw_value());

        assert_eq!(filter.filter(5.0), 5.0);
        assert!(filter.has_last_raw_value());
        assert_eq!(filter.last_value(), 5.0);
        assert_eq!(filter.last_raw_value(), 5.0);
    }

    #[test]
    fn test_exponential_update() {
        let mut filter = LowPassFilter::new();
        filter.filter(0.0);

        let output = filter.filter_with_alpha(10.0, 0.25);
        assert!((output - 2.5).abs() < 1e-12, "got {}", output);
        assert_eq!(filter.last_raw_value(), 10.0);
        assert_eq!(filter.last_value(), output);

        // stored alpha is reused
        let output = filter.filter(10.0);
        assert!((output - 4.375).abs() < 1e-12, "got {}", output);
    }

    #[test]
    fn test_zero_alpha_freezes_output() {
        let mut filter = LowPassFilter::new();
        filter.filter(3.0);

        for _ in 0..10 {
            assert_eq!(filter.filter_with_alpha(100.0, 0.0), 3.0);
        }
        assert_eq!(filter.last_raw_value(), 100.0);
    }

    #[test]
    fn test_smoothing_factor_bounds() {
        for &rate in &[1.0, 30.0, 120.0, 1000.0] {
            for &cutoff in &[1e-3, 0.1, 1.0, 10.0, 1e3] {
                let alpha = smoothing_factor(cutoff, rate);
                assert!(
                    alpha > 0.0 && alpha < 1.0,
                    "alpha {} out of range for cutoff {} rate {}",
                    alpha,
                    cutoff,
                    rate
                );
            }
        }
    }

    #[test]
    fn test_smoothing_factor_limits() {
        let rate = 120.0;
        assert!(smoothing_factor(1e9, rate) > 0.999);
        assert!(smoothing_factor(1e-9, rate) < 1e-9);
        assert_eq!(smoothing_factor(0.0, rate), 0.0);

        let mut previous = 0.0;
        for cutoff in [0.01, 0.1, 1.0, 10.0, 100.0] {
            let alpha = smoothing_factor(cutoff, rate);
            assert!(alpha > previous);
            previous = alpha;
        }
    }

    #[test]
    fn test_filter_with_cutoff_matches_formula() {
        let mut filter = LowPassFilter::new();
        filter.filter(0.0);

        let output = filter.filter_with_cutoff(1.0, 1.0, 2.0 * PI);
        assert!((output - 0.5).abs() < 1e-12, "got {}", output);
        assert!((filter.alpha() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut filter = LowPassFilter::with_alpha(0.5);
        filter.filter(1.0);
        filter.filter(2.0);
        filter.reset();

        assert!(!filter.has_last_raw_value());
        assert_eq!(filter.alpha(), 0.5);
        assert_eq!(filter.filter(7.0), 7.0);
    }
}
