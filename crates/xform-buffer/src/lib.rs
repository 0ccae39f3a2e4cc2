//! # xform-buffer
//!
//! Memory transfer for the xform value types: copies vectors, matrices,
//! quaternions and axis-angles to and from flat buffers in a tightly
//! packed, column-major layout.
//!
//! - [`Packed`] - component count and order of every value type
//! - [`put`]/[`get`] - typed `f32`/`f64` slices, any source precision
//! - [`put_bytes`]/[`get_bytes`] - native-endian byte slices, unaligned
//! - [`put_3x3`]/[`put_4x4`] - affine matrices widened with their implicit
//!   homogeneous row
//!
//! Every call checks the buffer length first and fails with
//! [`Error::BufferTooSmall`](xform_core::Error::BufferTooSmall) without
//! writing anything.
//!
//! # Usage
//!
//! ```rust
//! use xform_buffer::{get_f32, put_f32, put_4x4};
//! use xform_math::{Matrix4x3d, Quaterniond, Vector3d};
//!
//! // upload a rotation as floats
//! let mut uniforms = [0.0f32; 20];
//! put_f32(&Quaterniond::rotation_y(0.5), &mut uniforms, 0)?;
//!
//! // and a compact affine as a full 4x4
//! let model = Matrix4x3d::translation(Vector3d::new(1.0, 2.0, 3.0));
//! put_4x4(&model, &mut uniforms, 4)?;
//! assert_eq!(&uniforms[16..20], &[1.0, 2.0, 3.0, 1.0]);
//!
//! let q: xform_math::Quaternionf = get_f32(&uniforms, 0)?;
//! assert!((q.length() - 1.0).abs() < 1e-6);
//! # Ok::<(), xform_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod packed;
mod transfer;

pub use packed::{MAX_COMPONENTS, Packed};
pub use transfer::*;
