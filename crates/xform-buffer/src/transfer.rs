//! Copying values to and from typed and byte buffers.
//!
//! Offsets count buffer elements: scalars for typed slices, bytes for byte
//! slices. Byte buffers use native endianness and need no alignment.
//! Writing to an `f32` buffer rounds `f64` components to nearest.

use bytemuck::Pod;
use num_traits::ConstZero;
use tracing::trace;
use xform_core::{Error, Result, Scalar};
use xform_math::{Matrix3x2, Matrix4x3};

use crate::packed::{MAX_COMPONENTS, Packed};

/// Writes `value` into `buf` starting at `offset`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` cannot hold `V::LEN` elements at
/// `offset`. Nothing is written in that case.
pub fn put<V: Packed, E: Scalar>(value: &V, buf: &mut [E], offset: usize) -> Result<()> {
    Error::check_buffer(offset, V::LEN, buf.len())?;
    trace!(offset, len = V::LEN, bits = E::BITS, "put");
    let mut tmp = [V::Scalar::ZERO; MAX_COMPONENTS];
    value.pack(&mut tmp);
    for (dst, src) in buf[offset..offset + V::LEN].iter_mut().zip(&tmp) {
        *dst = E::from_f64(src.as_f64());
    }
    Ok(())
}

/// Reads a value from `buf` starting at `offset`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` holds fewer than `V::LEN` elements
/// past `offset`.
pub fn get<V: Packed, E: Scalar>(buf: &[E], offset: usize) -> Result<V> {
    Error::check_buffer(offset, V::LEN, buf.len())?;
    trace!(offset, len = V::LEN, bits = E::BITS, "get");
    let mut tmp = [V::Scalar::ZERO; MAX_COMPONENTS];
    for (dst, src) in tmp.iter_mut().zip(&buf[offset..offset + V::LEN]) {
        *dst = V::Scalar::from_f64(src.as_f64());
    }
    Ok(V::unpack(&tmp))
}

/// Writes `value` as `E` scalars into the byte buffer `bytes` at byte
/// `offset`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if fewer than `V::LEN * size_of::<E>()` bytes
/// follow `offset`.
pub fn put_bytes<V: Packed, E: Scalar + Pod>(
    value: &V,
    bytes: &mut [u8],
    offset: usize,
) -> Result<()> {
    let size = size_of::<E>();
    Error::check_buffer(offset, V::LEN * size, bytes.len())?;
    let mut tmp = [E::ZERO; MAX_COMPONENTS];
    put(value, &mut tmp, 0)?;
    let src: &[u8] = bytemuck::cast_slice(&tmp[..V::LEN]);
    bytes[offset..offset + src.len()].copy_from_slice(src);
    Ok(())
}

/// Reads a value stored as `E` scalars from `bytes` at byte `offset`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if fewer than `V::LEN * size_of::<E>()` bytes
/// follow `offset`.
pub fn get_bytes<V: Packed, E: Scalar + Pod>(bytes: &[u8], offset: usize) -> Result<V> {
    let size = size_of::<E>();
    Error::check_buffer(offset, V::LEN * size, bytes.len())?;
    let mut tmp = [E::ZERO; MAX_COMPONENTS];
    let src = &bytes[offset..offset + V::LEN * size];
    for (dst, chunk) in tmp.iter_mut().zip(src.chunks_exact(size)) {
        *dst = bytemuck::pod_read_unaligned(chunk);
    }
    get(&tmp, 0)
}

/// [`put`] into an `f32` buffer.
#[inline]
pub fn put_f32<V: Packed>(value: &V, buf: &mut [f32], offset: usize) -> Result<()> {
    put(value, buf, offset)
}

/// [`get`] from an `f32` buffer.
#[inline]
pub fn get_f32<V: Packed>(buf: &[f32], offset: usize) -> Result<V> {
    get(buf, offset)
}

/// [`put`] into an `f64` buffer.
#[inline]
pub fn put_f64<V: Packed>(value: &V, buf: &mut [f64], offset: usize) -> Result<()> {
    put(value, buf, offset)
}

/// [`get`] from an `f64` buffer.
#[inline]
pub fn get_f64<V: Packed>(buf: &[f64], offset: usize) -> Result<V> {
    get(buf, offset)
}

/// [`put_bytes`] with `f32` elements.
#[inline]
pub fn put_bytes_f32<V: Packed>(value: &V, bytes: &mut [u8], offset: usize) -> Result<()> {
    put_bytes::<V, f32>(value, bytes, offset)
}

/// [`get_bytes`] with `f32` elements.
#[inline]
pub fn get_bytes_f32<V: Packed>(bytes: &[u8], offset: usize) -> Result<V> {
    get_bytes::<V, f32>(bytes, offset)
}

/// [`put_bytes`] with `f64` elements.
#[inline]
pub fn put_bytes_f64<V: Packed>(value: &V, bytes: &mut [u8], offset: usize) -> Result<()> {
    put_bytes::<V, f64>(value, bytes, offset)
}

/// [`get_bytes`] with `f64` elements.
#[inline]
pub fn get_bytes_f64<V: Packed>(bytes: &[u8], offset: usize) -> Result<V> {
    get_bytes::<V, f64>(bytes, offset)
}

/// Writes a 2D affine matrix as a full 3x3 (nine elements), adding the
/// implicit `0 0 1` row.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` cannot hold nine elements at `offset`.
pub fn put_3x3<T: Scalar, E: Scalar>(m: &Matrix3x2<T>, buf: &mut [E], offset: usize) -> Result<()> {
    put(&m.to_matrix3(), buf, offset)
}

/// Writes a 3D affine matrix as a full 4x4 (sixteen elements), adding the
/// implicit `0 0 0 1` row.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `buf` cannot hold sixteen elements at
/// `offset`.
pub fn put_4x4<T: Scalar, E: Scalar>(m: &Matrix4x3<T>, buf: &mut [E], offset: usize) -> Result<()> {
    put(&m.to_matrix4(), buf, offset)
}
