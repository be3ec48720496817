//! One Euro filtering for noisy scalar, vector and orientation signals
//!
//! The [`filtering::one_euro::OneEuroFilter`] smooths one scalar channel
//! with a cutoff frequency that follows the signal's speed: heavy
//! smoothing at rest, little lag in fast motion.
//! [`filtering::typed::TypedFilter`] applies it per channel to nalgebra
//! vectors, points and unit quaternions, and
//! [`filtering::dynamic::DynamicFilter`] does the same for a kind chosen
//! at runtime.
//!
//! ```
//! use nalgebra::Vector3;
//! use one_euro_core::{FilterParams, TypedFilter};
//!
//! let params = FilterParams::new(120.0).with_min_cutoff(1.0).with_beta(0.01);
//! let mut filter = TypedFilter::<Vector3<f64>>::with_params(params)?;
//!
//! let first = filter.filter_at(Vector3::new(0.0, 1.0, 0.0), Some(0.0));
//! assert_eq!(first, Vector3::new(0.0, 1.0, 0.0));
//! let _next = filter.filter_at(Vector3::new(0.01, 1.02, -0.01), Some(1.0 / 120.0));
//! # Ok::<(), one_euro_core::FilterError>(())
//! ```
pub mod common;
pub mod error;
pub mod filtering;

pub use common::types::{Sample, Timestamp};
pub use error::FilterError;
pub use filtering::channels::Channels;
pub use filtering::clock::{Clock, ElapsedClock, FixedStepClock};
pub use filtering::dynamic::{DynamicFilter, SignalKind};
pub use filtering::low_pass::{smoothing_factor, LowPassFilter};
pub use filtering::one_euro::OneEuroFilter;
pub use filtering::params::FilterParams;
pub use filtering::typed::TypedFilter;
pub use filtering::Filter;
