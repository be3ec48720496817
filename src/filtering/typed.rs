//! One Euro filtering of structured values, one scalar filter per channel

use super::bank::ChannelFilterBank;
use super::channels::{Channels, MAX_CHANNELS};
use super::clock::{Clock, ElapsedClock};
use super::params::FilterParams;
use super::Filter;
use crate::common::types::{Sample, Timestamp};
use crate::error::FilterError;

/// Filters a structured value `T` by running an independent
/// [`OneEuroFilter`](super::one_euro::OneEuroFilter) on each of its channels.
///
/// Samples passed to [`TypedFilter::filter`] are timestamped with the
/// clock `C`; [`TypedFilter::filter_at`] takes the timestamp explicitly.
#[derive(Debug, Clone)]
pub struct TypedFilter<T: Channels, C: Clock = ElapsedClock> {
    bank: ChannelFilterBank,
    clock: C,
    last_raw: Option<T>,
    last_output: Option<T>,
}

impl<T: Channels> TypedFilter<T> {
    /// Create a filter for values sampled at roughly `frequency` Hz,
    /// timestamped with the time elapsed since construction
    pub fn new(frequency: f64) -> Result<Self, FilterError> {
        Self::with_params(FilterParams::new(frequency))
    }

    pub fn with_params(params: FilterParams) -> Result<Self, FilterError> {
        Self::with_clock(params, ElapsedClock::new())
    }
}

impl<T: Channels, C: Clock> TypedFilter<T, C> {
    /// Create a filter that reads timestamps from `clock`
    pub fn with_clock(params: FilterParams, clock: C) -> Result<Self, FilterError> {
        if T::COUNT == 0 || T::COUNT > MAX_CHANNELS {
            return Err(FilterError::UnsupportedType(
                std::any::type_name::<T>().to_string(),
            ));
        }

        Ok(TypedFilter {
            bank: ChannelFilterBank::new(T::COUNT, params)?,
            clock,
            last_raw: None,
            last_output: None,
        })
    }

    /// Broadcast new parameters to every channel. History is kept.
    pub fn update_params(&mut self, params: FilterParams) -> Result<(), FilterError> {
        self.bank.update_params(params)
    }

    pub fn params(&self) -> FilterParams {
        self.bank.params().unwrap_or_default()
    }

    /// Filter `value`, timestamped by the clock
    pub fn filter(&mut self, value: T) -> T {
        let timestamp = self.clock.now();
        self.filter_at(value, Some(timestamp))
    }

    /// Filter `value` sampled at `timestamp` seconds, or at the configured
    /// frequency when `timestamp` is `None`
    pub fn filter_at(&mut self, value: T, timestamp: Option<Timestamp>) -> T {
        let aligned = match &self.last_output {
            Some(previous) => value.align_to(previous),
            None => value,
        };

        let mut buffer = [0.0; MAX_CHANNELS];
        let channels = &mut buffer[..T::COUNT];
        aligned.write_channels(channels);
        self.bank.filter_channels(channels, timestamp);

        let output = T::from_channels(channels).unwrap_or_else(|| {
            log::warn!(
                "filtered channels {:?} do not form a valid {}, holding previous output",
                channels,
                std::any::type_name::<T>()
            );
            self.last_output.unwrap_or(aligned)
        });

        self.last_raw = Some(value);
        self.last_output = Some(output);
        output
    }

    pub fn filter_sample(&mut self, sample: Sample<T>) -> T {
        self.filter_at(sample.value, Some(sample.timestamp))
    }

    pub fn has_last_raw_value(&self) -> bool {
        self.last_raw.is_some()
    }

    /// Last raw input, as supplied by the caller
    pub fn last_raw_value(&self) -> Option<T> {
        self.last_raw
    }

    /// Last filtered output
    pub fn last_value(&self) -> Option<T> {
        self.last_output
    }

    /// Per-channel filters, for inspection
    pub fn channels(&self) -> &ChannelFilterBank {
        &self.bank
    }

    /// Forget all history; parameters and clock are kept
    pub fn reset(&mut self) {
        self.bank.reset();
        self.last_raw = None;
        self.last_output = None;
    }
}

impl<T: Channels, C: Clock> Filter<T> for TypedFilter<T, C> {
    fn filter(&mut self, input: T) -> T {
        TypedFilter::filter(self, input)
    }
}
