//! Common utilities and types shared by the filters

/// Common types used across the codebase
pub mod types {
    /// Sample time in seconds, monotonic
    pub type Timestamp = f64;

    /// A raw value captured at one sampling tick
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Sample<T> {
        pub timestamp: Timestamp,
        pub value: T,
    }

    impl<T> Sample<T> {
        /// Create a new sample
        pub fn new(timestamp: Timestamp, value: T) -> Self {
            Sample { timestamp, value }
        }
    }
}

/// Returns true if `timestamp` can be used to derive a sampling interval
pub(crate) fn is_valid_timestamp(timestamp: types::Timestamp) -> bool {
    timestamp.is_finite() && timestamp >= 0.0
}
