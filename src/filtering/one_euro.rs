//! The One Euro filter for a single scalar channel
//!
//! The cutoff frequency follows the estimated speed of the signal:
//! `cutoff = min_cutoff + beta * |speed|`. Slow signals get heavy smoothing
//! (little jitter), fast signals get a wide cutoff (little lag).
//!
//! See Casiez, Roussel & Vogel, "1€ Filter: A Simple Speed-based Low-pass
//! Filter for Noisy Input in Interactive Systems", CHI 2012.

use super::low_pass::{smoothing_factor, LowPassFilter};
use super::params::FilterParams;
use super::Filter;
use crate::common::is_valid_timestamp;
use crate::common::types::Timestamp;
use crate::error::FilterError;

/// Speed-adaptive low-pass filter for one scalar channel
#[derive(Debug, Clone, PartialEq)]
pub struct OneEuroFilter {
    params: FilterParams,
    signal: LowPassFilter,
    derivative: LowPassFilter,
    last_timestamp: Option<Timestamp>,
}

impl OneEuroFilter {
    /// Create a filter for a signal sampled at roughly `frequency` Hz,
    /// with the default cutoffs and beta
    pub fn new(frequency: f64) -> Result<Self, FilterError> {
        Self::with_params(FilterParams::new(frequency))
    }

    /// Create a filter from a full parameter set
    pub fn with_params(params: FilterParams) -> Result<Self, FilterError> {
        params.validate()?;
        Ok(OneEuroFilter {
            params,
            signal: LowPassFilter::new(),
            derivative: LowPassFilter::new(),
            last_timestamp: None,
        })
    }

    /// Replace the configuration. History is kept; an invalid update
    /// leaves the current configuration in place.
    pub fn update_params(&mut self, params: FilterParams) -> Result<(), FilterError> {
        params.validate()?;
        if params != self.params {
            log::debug!("One Euro parameters changed: {:?} -> {:?}", self.params, params);
        }
        self.params = params;
        Ok(())
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// Filter one sample.
    ///
    /// With a timestamp (seconds, non-negative) the sampling rate is
    /// derived from the interval since the previous timestamp. Without
    /// one, or when the interval is not positive or too small to invert,
    /// the configured frequency is used.
    pub fn filter(&mut self, value: f64, timestamp: Option<Timestamp>) -> f64 {
        let rate = self.sampling_rate(timestamp);

        let raw_derivative = if self.signal.has_last_raw_value() {
            (value - self.signal.last_raw_value()) * rate
        } else {
            0.0
        };
        let speed = self
            .derivative
            .filter_with_cutoff(raw_derivative, self.params.derivative_cutoff, rate);

        let cutoff = self.params.min_cutoff + self.params.beta * speed.abs();
        self.signal.filter_with_alpha(value, smoothing_factor(cutoff, rate))
    }

    fn sampling_rate(&mut self, timestamp: Option<Timestamp>) -> f64 {
        let timestamp = timestamp.filter(|&t| is_valid_timestamp(t));
        let mut rate = self.params.frequency;

        if self.signal.has_last_raw_value() {
            if let (Some(previous), Some(current)) = (self.last_timestamp, timestamp) {
                let interval = current - previous;
                let derived = interval.recip();
                if interval > 0.0 && derived.is_finite() {
                    rate = derived;
                } else {
                    log::trace!(
                        "unusable timestamp interval {} -> {}, using {} Hz",
                        current,
                        previous,
                        rate
                    );
                }
            }
        }

        if timestamp.is_some() {
            self.last_timestamp = timestamp;
        }
        rate
    }

    pub fn has_last_raw_value(&self) -> bool {
        self.signal.has_last_raw_value()
    }

    pub fn last_value(&self) -> f64 {
        self.signal.last_value()
    }

    pub fn last_raw_value(&self) -> f64 {
        self.signal.last_raw_value()
    }

    /// Last valid timestamp seen
    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last_timestamp
    }

    /// Smoothed speed estimate of the signal, in units per second
    pub fn speed(&self) -> f64 {
        self.derivative.last_value()
    }

    /// Forget all history; parameters are kept
    pub fn reset(&mut self) {
        log::debug!("resetting One Euro filter");
        self.signal.reset();
        self.derivative.reset();
        self.last_timestamp = None;
    }
}

impl Filter<f64> for OneEuroFilter {
    fn filter(&mut self, input: f64) -> f64 {
        OneEuroFilter::filter(self, input, None)
    }
}
