//! Conversions to and from [`glam`] types.
//!
//! glam stores matrices column-major like this crate, so every conversion
//! is a flat copy. The affine shapes map onto glam's `Affine2`/`Affine3A`
//! (and their `D` variants), which use the same column layout.
//!
//! ```rust
//! use xform_math::{Matrix4f, Quaternionf, Vector3f};
//!
//! let q = Quaternionf::rotation_y(0.4);
//! let gq: glam::Quat = q.into();
//! let v = Vector3f::new(1.0, 2.0, 3.0);
//! let ours = q * v;
//! let theirs = gq * glam::Vec3::new(1.0, 2.0, 3.0);
//! assert!((ours - Vector3f::from(theirs)).length() < 1e-6);
//!
//! let m: glam::Mat4 = Matrix4f::translation(v).into();
//! assert_eq!(m.w_axis.truncate(), glam::Vec3::new(1.0, 2.0, 3.0));
//! ```

use crate::{
    Matrix2, Matrix3, Matrix3x2, Matrix4, Matrix4x3, Quaternion, Vector2, Vector3, Vector4,
};

/// `From` both ways between one of our vector-like types and a glam type,
/// through `from_array`/`to_array`.
macro_rules! impl_array_conversions {
    ($ours:ident<$t:ty>, $glam:ty) => {
        impl From<$glam> for $ours<$t> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$ours<$t>> for $glam {
            #[inline]
            fn from(v: $ours<$t>) -> Self {
                <$glam>::from_array(v.to_array())
            }
        }
    };
}

/// `From` both ways between one of our matrices and a glam matrix, through
/// the flat column-major arrays.
macro_rules! impl_cols_conversions {
    ($ours:ident<$t:ty>, $glam:ty) => {
        impl From<$glam> for $ours<$t> {
            #[inline]
            fn from(m: $glam) -> Self {
                Self::from_cols_array(m.to_cols_array())
            }
        }

        impl From<$ours<$t>> for $glam {
            #[inline]
            fn from(m: $ours<$t>) -> Self {
                <$glam>::from_cols_array(&m.to_cols_array())
            }
        }
    };
}

impl_array_conversions!(Vector2<f32>, glam::Vec2);
impl_array_conversions!(Vector2<f64>, glam::DVec2);
impl_array_conversions!(Vector3<f32>, glam::Vec3);
impl_array_conversions!(Vector3<f64>, glam::DVec3);
impl_array_conversions!(Vector4<f32>, glam::Vec4);
impl_array_conversions!(Vector4<f64>, glam::DVec4);
impl_array_conversions!(Quaternion<f32>, glam::Quat);
impl_array_conversions!(Quaternion<f64>, glam::DQuat);

impl_cols_conversions!(Matrix2<f32>, glam::Mat2);
impl_cols_conversions!(Matrix2<f64>, glam::DMat2);
impl_cols_conversions!(Matrix3<f32>, glam::Mat3);
impl_cols_conversions!(Matrix3<f64>, glam::DMat3);
impl_cols_conversions!(Matrix4<f32>, glam::Mat4);
impl_cols_conversions!(Matrix4<f64>, glam::DMat4);
impl_cols_conversions!(Matrix3x2<f32>, glam::Affine2);
impl_cols_conversions!(Matrix3x2<f64>, glam::DAffine2);
impl_cols_conversions!(Matrix4x3<f32>, glam::Affine3A);
impl_cols_conversions!(Matrix4x3<f64>, glam::DAffine3);
