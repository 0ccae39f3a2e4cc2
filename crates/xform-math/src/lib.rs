//! # xform-math
//!
//! Transformation algebra for 3D graphics: vectors, matrices, quaternions
//! and axis-angle rotations, generic over `f32`/`f64`.
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - component vectors
//! - [`Matrix2`], [`Matrix3`], [`Matrix4`] - square matrices
//! - [`Matrix3x2`], [`Matrix4x3`] - 2D and 3D affine transforms
//! - [`Quaternion`] - rotations, composition, slerp/nlerp, look-along
//! - [`AxisAngle4`] - axis plus angle
//! - [`interpolation_factors_triangle`] and friends - barycentric
//!   interpolation and its screen-space derivatives
//!
//! Every type has `f` and `d` aliases (`Quaternionf`, `Matrix4d`, ...).
//!
//! # Conventions
//!
//! Matrices are **column-major** and multiply **column vectors**. Field
//! `mCR` is column `C`, row `R`. Products compose right to left: `a * b`
//! applied to a vector applies `b` first. Quaternion products follow the
//! same order, and rotations are right-handed.
//!
//! Numerics never fail: singular inversions and zero-length normalizations
//! produce NaN or infinity. Only the runtime-indexed `get`/`set` accessors
//! return [`xform_core::Error`].
//!
//! Methods producing a new value have an `_into` twin writing into a
//! caller-provided destination.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Matrix4d, Quaterniond, Vector3d};
//!
//! let a = Quaterniond::rotation_x(0.3);
//! let b = Quaterniond::rotation_y(1.2);
//! let mid = a.slerp(&b, 0.5);
//!
//! let m = Matrix4d::translation_rotate_scale(Vector3d::new(0.0, 1.0, 0.0), &mid, Vector3d::ONE);
//! let back = m.normalized_rotation();
//! assert!((back.dot(&mid).abs() - 1.0).abs() < 1e-6);
//! ```
//!
//! # Feature Flags
//!
//! - `fast-math` - route trig, inverse square root and fused multiply-add
//!   through [`xform_core::Fast`]
//! - `serde` - `Serialize`/`Deserialize` for every value type
//!
//! # Dependencies
//!
//! - [`xform_core`] - `Scalar`, math strategies, errors
//! - [`glam`] - `From` conversions (see the `glam_interop` module)
//! - [`approx`] - approximate comparisons for every value type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod display;
mod linalg;
mod macros;

mod axis_angle;
mod glam_interop;
mod mat2;
mod mat3;
mod mat3x2;
mod mat4;
mod mat4x3;
mod quat;
mod rotation;
mod triangle;
mod vec2;
mod vec3;
mod vec4;

pub use axis_angle::*;
pub use mat2::*;
pub use mat3::*;
pub use mat3x2::*;
pub use mat4::*;
pub use mat4x3::*;
pub use quat::*;
pub use rotation::RotationPart;
pub use triangle::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
