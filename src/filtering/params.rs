//! Filter configuration

use crate::error::FilterError;
use std::collections::HashMap;

/// Sampling rate used by the reference setup, in Hz
pub const DEFAULT_FREQUENCY: f64 = 120.0;
pub const DEFAULT_MIN_CUTOFF: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 0.0;
pub const DEFAULT_DERIVATIVE_CUTOFF: f64 = 1.0;

/// Parameters of a One Euro filter.
///
/// - `frequency` is the expected sampling rate in Hz. It is used on the
///   first sample and whenever no usable timestamp is available.
/// - `min_cutoff` is the cutoff frequency at rest. Lowering it reduces
///   jitter but increases lag.
/// - `beta` scales how much the cutoff widens with signal speed.
///   Increasing it reduces lag on fast movements.
/// - `derivative_cutoff` is the fixed cutoff used to smooth the speed
///   estimate. It rarely needs tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub frequency: f64,
    pub min_cutoff: f64,
    pub beta: f64,
    pub derivative_cutoff: f64,
}

impl FilterParams {
    /// Keys understood by [`FilterParams::configure`]
    pub const KEYS: [&'static str; 4] = ["frequency", "min_cutoff", "beta", "derivative_cutoff"];

    /// Create parameters with the default cutoffs and beta
    pub fn new(frequency: f64) -> Self {
        FilterParams {
            frequency,
            min_cutoff: DEFAULT_MIN_CUTOFF,
            beta: DEFAULT_BETA,
            derivative_cutoff: DEFAULT_DERIVATIVE_CUTOFF,
        }
    }

    pub fn with_min_cutoff(self, min_cutoff: f64) -> Self {
        FilterParams { min_cutoff, ..self }
    }

    pub fn with_beta(self, beta: f64) -> Self {
        FilterParams { beta, ..self }
    }

    pub fn with_derivative_cutoff(self, derivative_cutoff: f64) -> Self {
        FilterParams {
            derivative_cutoff,
            ..self
        }
    }

    /// Check that every rate is positive and finite and beta is non-negative
    pub fn validate(&self) -> Result<(), FilterError> {
        positive("frequency", self.frequency)?;
        positive("min_cutoff", self.min_cutoff)?;
        positive("derivative_cutoff", self.derivative_cutoff)?;

        if !self.beta.is_finite() {
            return Err(FilterError::invalid("beta", self.beta, "must be finite"));
        }
        if self.beta < 0.0 {
            return Err(FilterError::invalid("beta", self.beta, "must be non-negative"));
        }

        Ok(())
    }

    /// Apply values from a parameter map.
    ///
    /// Unknown keys are ignored. The update is all-or-nothing: if any
    /// resulting value is invalid, `self` is left untouched.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), FilterError> {
        let mut updated = *self;

        if let Some(&frequency) = params.get("frequency") {
            updated.frequency = frequency;
        }

        if let Some(&min_cutoff) = params.get("min_cutoff") {
            updated.min_cutoff = min_cutoff;
        }

        if let Some(&beta) = params.get("beta") {
            updated.beta = beta;
        }

        if let Some(&derivative_cutoff) = params.get("derivative_cutoff") {
            updated.derivative_cutoff = derivative_cutoff;
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams::new(DEFAULT_FREQUENCY)
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), FilterError> {
    if !value.is_finite() {
        return Err(FilterError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(FilterError::invalid(name, value, "must be positive"));
    }
    Ok(())
}
