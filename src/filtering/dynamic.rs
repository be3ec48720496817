//! Filters whose value type is chosen at runtime by name

use super::channels::Channels;
use super::params::FilterParams;
use super::typed::TypedFilter;
use crate::common::types::Timestamp;
use crate::error::FilterError;
use nalgebra::{UnitQuaternion, Vector2, Vector3, Vector4};
use std::fmt;
use std::str::FromStr;

/// Shape of the values fed to a [`DynamicFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Scalar,
    Vector2,
    Vector3,
    Vector4,
    /// Unit quaternion given as `x y z w`
    Quaternion,
}

impl SignalKind {
    pub const ALL: [SignalKind; 5] = [
        SignalKind::Scalar,
        SignalKind::Vector2,
        SignalKind::Vector3,
        SignalKind::Vector4,
        SignalKind::Quaternion,
    ];

    pub fn channel_count(self) -> usize {
        match self {
            SignalKind::Scalar => f64::COUNT,
            SignalKind::Vector2 => Vector2::<f64>::COUNT,
            SignalKind::Vector3 => Vector3::<f64>::COUNT,
            SignalKind::Vector4 => Vector4::<f64>::COUNT,
            SignalKind::Quaternion => UnitQuaternion::<f64>::COUNT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Scalar => "scalar",
            SignalKind::Vector2 => "vector2",
            SignalKind::Vector3 => "vector3",
            SignalKind::Vector4 => "vector4",
            SignalKind::Quaternion => "quaternion",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" | "float" => Ok(SignalKind::Scalar),
            "vector2" | "vec2" => Ok(SignalKind::Vector2),
            "vector3" | "vec3" => Ok(SignalKind::Vector3),
            "vector4" | "vec4" => Ok(SignalKind::Vector4),
            "quaternion" | "quat" => Ok(SignalKind::Quaternion),
            _ => Err(FilterError::UnsupportedType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
enum Inner {
    Scalar(TypedFilter<f64>),
    Vector2(TypedFilter<Vector2<f64>>),
    Vector3(TypedFilter<Vector3<f64>>),
    Vector4(TypedFilter<Vector4<f64>>),
    Quaternion(TypedFilter<UnitQuaternion<f64>>),
}

/// A One Euro filter over values given as plain channel slices
#[derive(Debug, Clone)]
pub struct DynamicFilter {
    kind: SignalKind,
    inner: Inner,
}

impl DynamicFilter {
    pub fn new(kind: SignalKind, params: FilterParams) -> Result<Self, FilterError> {
        let inner = match kind {
            SignalKind::Scalar => Inner::Scalar(TypedFilter::with_params(params)?),
            SignalKind::Vector2 => Inner::Vector2(TypedFilter::with_params(params)?),
            SignalKind::Vector3 => Inner::Vector3(TypedFilter::with_params(params)?),
            SignalKind::Vector4 => Inner::Vector4(TypedFilter::with_params(params)?),
            SignalKind::Quaternion => Inner::Quaternion(TypedFilter::with_params(params)?),
        };
        Ok(DynamicFilter { kind, inner })
    }

    /// Create a filter from a kind name such as `"vector3"` or `"quaternion"`
    pub fn from_name(name: &str, params: FilterParams) -> Result<Self, FilterError> {
        Self::new(name.parse()?, params)
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Filter one sample given as `kind().channel_count()` channel values
    pub fn filter(
        &mut self,
        values: &[f64],
        timestamp: Option<Timestamp>,
    ) -> Result<Vec<f64>, FilterError> {
        let expected = self.kind.channel_count();
        if values.len() != expected {
            return Err(FilterError::ChannelCountMismatch {
                expected,
                actual: values.len(),
            });
        }

        match &mut self.inner {
            Inner::Scalar(filter) => filter_slice(filter, values, timestamp),
            Inner::Vector2(filter) => filter_slice(filter, values, timestamp),
            Inner::Vector3(filter) => filter_slice(filter, values, timestamp),
            Inner::Vector4(filter) => filter_slice(filter, values, timestamp),
            Inner::Quaternion(filter) => filter_slice(filter, values, timestamp),
        }
    }

    pub fn update_params(&mut self, params: FilterParams) -> Result<(), FilterError> {
        match &mut self.inner {
            Inner::Scalar(filter) => filter.update_params(params),
            Inner::Vector2(filter) => filter.update_params(params),
            Inner::Vector3(filter) => filter.update_params(params),
            Inner::Vector4(filter) => filter.update_params(params),
            Inner::Quaternion(filter) => filter.update_params(params),
        }
    }

    pub fn params(&self) -> FilterParams {
        match &self.inner {
            Inner::Scalar(filter) => filter.params(),
            Inner::Vector2(filter) => filter.params(),
            Inner::Vector3(filter) => filter.params(),
            Inner::Vector4(filter) => filter.params(),
            Inner::Quaternion(filter) => filter.params(),
        }
    }

    /// Last filtered output as channel values
    pub fn last_value(&self) -> Option<Vec<f64>> {
        match &self.inner {
            Inner::Scalar(filter) => filter.last_value().map(to_vec),
            Inner::Vector2(filter) => filter.last_value().map(to_vec),
            Inner::Vector3(filter) => filter.last_value().map(to_vec),
            Inner::Vector4(filter) => filter.last_value().map(to_vec),
            Inner::Quaternion(filter) => filter.last_value().map(to_vec),
        }
    }

    pub fn has_last_raw_value(&self) -> bool {
        match &self.inner {
            Inner::Scalar(filter) => filter.has_last_raw_value(),
            Inner::Vector2(filter) => filter.has_last_raw_value(),
            Inner::Vector3(filter) => filter.has_last_raw_value(),
            Inner::Vector4(filter) => filter.has_last_raw_value(),
            Inner::Quaternion(filter) => filter.has_last_raw_value(),
        }
    }

    pub fn reset(&mut self) {
        match &mut self.inner {
            Inner::Scalar(filter) => filter.reset(),
            Inner::Vector2(filter) => filter.reset(),
            Inner::Vector3(filter) => filter.reset(),
            Inner::Vector4(filter) => filter.reset(),
            Inner::Quaternion(filter) => filter.reset(),
        }
    }
}

fn filter_slice<T: Channels>(
    filter: &mut TypedFilter<T>,
    values: &[f64],
    timestamp: Option<Timestamp>,
) -> Result<Vec<f64>, FilterError> {
    let value = T::from_channels(values).ok_or_else(|| FilterError::InvalidValue {
        kind: std::any::type_name::<T>(),
        values: values.to_vec(),
    })?;
    Ok(to_vec(filter.filter_at(value, timestamp)))
}

fn to_vec<T: Channels>(value: T) -> Vec<f64> {
    let mut out = vec![0.0; T::COUNT];
    value.write_channels(&mut out);
    out
}
