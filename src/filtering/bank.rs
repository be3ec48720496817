//! A fixed set of scalar One Euro filters driven in lockstep

use super::one_euro::OneEuroFilter;
use super::params::FilterParams;
use crate::common::types::Timestamp;
use crate::error::FilterError;

/// One independent [`OneEuroFilter`] per channel, sharing one configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFilterBank {
    filters: Vec<OneEuroFilter>,
}

impl ChannelFilterBank {
    /// Create `count` filters with identical parameters
    pub fn new(count: usize, params: FilterParams) -> Result<Self, FilterError> {
        let filter = OneEuroFilter::with_params(params)?;
        Ok(ChannelFilterBank {
            filters: vec![filter; count],
        })
    }

    /// Number of channels, fixed at construction
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Configuration shared by every channel
    pub fn params(&self) -> Option<FilterParams> {
        self.filters.first().map(OneEuroFilter::params)
    }

    /// Broadcast new parameters to every channel without touching history
    pub fn update_params(&mut self, params: FilterParams) -> Result<(), FilterError> {
        params.validate()?;
        for filter in &mut self.filters {
            filter.update_params(params)?;
        }
        Ok(())
    }

    /// Filter one value per channel, writing the results back into `channels`
    pub fn filter_in_place(
        &mut self,
        channels: &mut [f64],
        timestamp: Option<Timestamp>,
    ) -> Result<(), FilterError> {
        if channels.len() != self.filters.len() {
            return Err(FilterError::ChannelCountMismatch {
                expected: self.filters.len(),
                actual: channels.len(),
            });
        }
        self.filter_channels(channels, timestamp);
        Ok(())
    }

    // Callers guarantee `channels.len() == self.len()`
    pub(crate) fn filter_channels(&mut self, channels: &mut [f64], timestamp: Option<Timestamp>) {
        for (filter, channel) in self.filters.iter_mut().zip(channels.iter_mut()) {
            *channel = filter.filter(*channel, timestamp);
        }
    }

    pub fn has_last_raw_value(&self) -> bool {
        self.filters
            .first()
            .map_or(false, OneEuroFilter::has_last_raw_value)
    }

    /// Copy each channel's last filtered value into `out`
    pub fn last_values(&self, out: &mut [f64]) {
        for (filter, value) in self.filters.iter().zip(out.iter_mut()) {
            *value = filter.last_value();
        }
    }

    /// Copy each channel's last raw value into `out`
    pub fn last_raw_values(&self, out: &mut [f64]) {
        for (filter, value) in self.filters.iter().zip(out.iter_mut()) {
            *value = filter.last_raw_value();
        }
    }

    pub fn channel(&self, index: usize) -> Option<&OneEuroFilter> {
        self.filters.get(index)
    }

    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }
}
