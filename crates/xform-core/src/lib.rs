//! # xform-core
//!
//! Foundation of the xform transformation algebra.
//!
//! - [`Scalar`] - numeric trait implemented for `f32` and `f64`; every
//!   vector, matrix and quaternion type is generic over it
//! - [`MathStrategy`], [`Exact`], [`Fast`], [`Precision`] - swappable
//!   precision for trig, inverse square root and fused multiply-add
//! - [`math`] - scalar helpers bound to the default strategy
//! - [`Error`], [`Result`] - errors of the accessor/marshalling/config layers
//! - [`Options`] - environment-driven configuration
//!
//! ## Crate Structure
//!
//! ```text
//! xform-core (this crate)
//!    ^
//!    |
//!    +-- xform-math (vectors, matrices, quaternions, interpolation)
//!    +-- xform-buffer (memory transfer)
//! ```
//!
//! ## Feature Flags
//!
//! - `fast-math` - bind [`math`] helpers to [`Fast`] instead of [`Exact`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod math;
pub mod options;
pub mod scalar;
pub mod strategy;

pub use error::{Error, Result};
pub use options::Options;
pub use scalar::Scalar;
pub use strategy::{DefaultStrategy, Exact, Fast, MathStrategy, Precision};
