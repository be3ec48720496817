//! Decomposition of structured values into independently filtered scalar channels

use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector2, Vector3, Vector4};

/// Upper bound on [`Channels::COUNT`]
pub const MAX_CHANNELS: usize = 4;

/// Smallest quaternion norm that can still be renormalized
const MIN_QUATERNION_NORM: f64 = 1e-9;

/// A value that can be split into `COUNT` scalar channels and rebuilt from them.
///
/// `write_channels` and `from_channels` are given slices of exactly
/// `COUNT` elements.
pub trait Channels: Copy {
    const COUNT: usize;

    fn write_channels(&self, out: &mut [f64]);

    /// Rebuild a value from filtered channels, or `None` if they no
    /// longer describe a valid value
    fn from_channels(channels: &[f64]) -> Option<Self>;

    /// Bring `self` into the same representation branch as `reference`
    /// before filtering. Identity for types with a unique representation.
    fn align_to(self, _reference: &Self) -> Self {
        self
    }
}

impl Channels for f64 {
    const COUNT: usize = 1;

    fn write_channels(&self, out: &mut [f64]) {
        out[0] = *self;
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        channels.first().copied()
    }
}

impl Channels for Vector2<f64> {
    const COUNT: usize = 2;

    fn write_channels(&self, out: &mut [f64]) {
        out.copy_from_slice(self.as_slice());
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        Some(Vector2::from_column_slice(channels))
    }
}

impl Channels for Vector3<f64> {
    const COUNT: usize = 3;

    fn write_channels(&self, out: &mut [f64]) {
        out.copy_from_slice(self.as_slice());
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        Some(Vector3::from_column_slice(channels))
    }
}

impl Channels for Vector4<f64> {
    const COUNT: usize = 4;

    fn write_channels(&self, out: &mut [f64]) {
        out.copy_from_slice(self.as_slice());
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        Some(Vector4::from_column_slice(channels))
    }
}

impl Channels for Point3<f64> {
    const COUNT: usize = 3;

    fn write_channels(&self, out: &mut [f64]) {
        self.coords.write_channels(out);
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        Vector3::<f64>::from_channels(channels).map(Point3::from)
    }
}

/// Orientations are filtered as raw `(x, y, z, w)` components and
/// renormalized afterwards.
impl Channels for UnitQuaternion<f64> {
    const COUNT: usize = 4;

    fn write_channels(&self, out: &mut [f64]) {
        out.copy_from_slice(self.quaternion().coords.as_slice());
    }

    fn from_channels(channels: &[f64]) -> Option<Self> {
        let q = Quaternion::new(channels[3], channels[0], channels[1], channels[2]);
        UnitQuaternion::try_new(q, MIN_QUATERNION_NORM)
    }

    // q and -q are the same rotation; keep consecutive samples on the
    // same hemisphere so component-wise smoothing never averages across it
    fn align_to(self, reference: &Self) -> Self {
        if self.quaternion().coords.dot(&reference.quaternion().coords) < 0.0 {
            UnitQuaternion::new_unchecked(-self.into_inner())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose<T: Channels>(value: T) -> Vec<f64> {
        let mut out = vec![0.0; T::COUNT];
        value.write_channels(&mut out);
        out
    }

    #[test]
    fn test_channel_counts_fit_buffer() {
        for count in [
            f64::COUNT,
            Vector2::<f64>::COUNT,
            Vector3::<f64>::COUNT,
            Vector4::<f64>::COUNT,
            Point3::<f64>::COUNT,
            UnitQuaternion::<f64>::COUNT,
        ] {
            assert!(count >= 1 && count <= MAX_CHANNELS);
        }
    }

    #[test]
    fn test_vector_channel_order() {
        assert_eq!(decompose(Vector3::new(1.0, 2.0, 3.0)), vec![1.0, 2.0, 3.0]);
        assert_eq!(decompose(Point3::new(-1.0, 0.5, 4.0)), vec![-1.0, 0.5, 4.0]);
        assert_eq!(
            Vector2::from_channels(&[7.0, 8.0]),
            Some(Vector2::new(7.0, 8.0))
        );
    }

    #[test]
    fn test_quaternion_channels_are_xyzw() {
        let q = UnitQuaternion::from_euler_angles(0.3, -0.2, 1.1);
        let channels = decompose(q);
        assert_eq!(channels, vec![q.i, q.j, q.k, q.w]);
    }

    #[test]
    fn test_quaternion_is_renormalized() {
        let rebuilt = UnitQuaternion::from_channels(&[0.0, 0.0, 0.5, 0.5]).unwrap();
        assert!((rebuilt.quaternion().norm() - 1.0).abs() < 1e-12);
        assert!((rebuilt.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_quaternion_is_rejected() {
        assert!(UnitQuaternion::from_channels(&[0.0, 0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_quaternion_alignment_keeps_rotation() {
        let reference = UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3);
        let flipped = UnitQuaternion::new_unchecked(-reference.into_inner());

        let aligned = flipped.align_to(&reference);
        assert!(aligned.quaternion().coords.dot(&reference.quaternion().coords) > 0.0);
        assert!(aligned.angle_to(&flipped) < 1e-9);

        let untouched = reference.align_to(&reference);
        assert_eq!(untouched, reference);
    }
}
