//! Flat component layout of the value types.

use xform_core::Scalar;
use xform_math::{
    AxisAngle4, Matrix2, Matrix3, Matrix3x2, Matrix4, Matrix4x3, Quaternion, Vector2, Vector3,
    Vector4,
};

/// Largest [`Packed::LEN`] of any value type (a 4x4 matrix).
pub const MAX_COMPONENTS: usize = 16;

/// A value stored as `LEN` consecutive scalars with no padding.
///
/// Vectors and quaternions store their components in declaration order
/// (`x, y, z, w`); axis-angle stores `x, y, z, angle`; matrices store
/// columns one after another.
///
/// # Example
///
/// ```rust
/// use xform_buffer::Packed;
/// use xform_math::Matrix2f;
///
/// let mut out = [0.0; 4];
/// Matrix2f::new(1.0, 2.0, 3.0, 4.0).pack(&mut out);
/// assert_eq!(out, [1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(Matrix2f::LEN, 4);
/// ```
pub trait Packed: Copy {
    /// Component type.
    type Scalar: Scalar;

    /// Number of components.
    const LEN: usize;

    /// Writes the components into `out[..LEN]`.
    ///
    /// # Panics
    ///
    /// If `out` is shorter than `LEN`.
    fn pack(&self, out: &mut [Self::Scalar]);

    /// Reads the components from `src[..LEN]`.
    ///
    /// # Panics
    ///
    /// If `src` is shorter than `LEN`.
    fn unpack(src: &[Self::Scalar]) -> Self;
}

/// Implements [`Packed`] through the type's flat array conversion.
macro_rules! impl_packed {
    ($ty:ident, $len:expr, $to:ident, $from:ident) => {
        impl<T: Scalar> Packed for $ty<T> {
            type Scalar = T;
            const LEN: usize = $len;

            #[inline]
            fn pack(&self, out: &mut [T]) {
                out[..$len].copy_from_slice(&self.$to());
            }

            #[inline]
            fn unpack(src: &[T]) -> Self {
                let mut a = [T::ZERO; $len];
                a.copy_from_slice(&src[..$len]);
                Self::$from(a)
            }
        }
    };
}

impl_packed!(Vector2, 2, to_array, from_array);
impl_packed!(Vector3, 3, to_array, from_array);
impl_packed!(Vector4, 4, to_array, from_array);
impl_packed!(Quaternion, 4, to_array, from_array);
impl_packed!(Matrix2, 4, to_cols_array, from_cols_array);
impl_packed!(Matrix3, 9, to_cols_array, from_cols_array);
impl_packed!(Matrix4, 16, to_cols_array, from_cols_array);
impl_packed!(Matrix3x2, 6, to_cols_array, from_cols_array);
impl_packed!(Matrix4x3, 12, to_cols_array, from_cols_array);

impl<T: Scalar> Packed for AxisAngle4<T> {
    type Scalar = T;
    const LEN: usize = 4;

    #[inline]
    fn pack(&self, out: &mut [T]) {
        out[..4].copy_from_slice(&[self.x, self.y, self.z, self.angle]);
    }

    #[inline]
    fn unpack(src: &[T]) -> Self {
        AxisAngle4::new(Vector3::new(src[0], src[1], src[2]), src[3])
    }
}
