//! Dense column-major products shared by the matrix types.
//!
//! Operands are flat slices in column-major order, element `(col, row)` of
//! an `n`-row matrix at `col * n + row`. Every accumulation goes through
//! the strategy's `fma`, so the precision choice applies to matrix products
//! too.

use xform_core::{MathStrategy, Scalar};

/// `out = a · b` for an `rows × inner` matrix `a` and an `inner × cols`
/// matrix `b`, where `cols = out.len() / rows`.
///
/// `out` must not overlap the operands, which the borrow checker enforces.
pub(crate) fn product<T: Scalar, M: MathStrategy>(
    a: &[T],
    b: &[T],
    rows: usize,
    inner: usize,
    out: &mut [T],
    m: &M,
) {
    let cols = out.len() / rows;
    for c in 0..cols {
        for r in 0..rows {
            let mut acc = T::ZERO;
            for k in 0..inner {
                acc = m.fma(a[k * rows + r], b[c * inner + k], acc);
            }
            out[c * rows + r] = acc;
        }
    }
}

/// `out = a · b` for affine matrices stored as `dim` linear columns of
/// `dim` rows followed by a translation column; the implicit last row is
/// `0 .. 0 1`.
pub(crate) fn affine_product<T: Scalar, M: MathStrategy>(
    a: &[T],
    b: &[T],
    dim: usize,
    out: &mut [T],
    m: &M,
) {
    let n = dim * dim;
    product(&a[..n], &b[..n], dim, dim, &mut out[..n], m);
    for r in 0..dim {
        let mut acc = a[n + r];
        for k in 0..dim {
            acc = m.fma(a[k * dim + r], b[n + k], acc);
        }
        out[n + r] = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xform_core::{Exact, Fast};

    #[test]
    fn test_product_2x2() {
        // [1 3] [5 7]   [23 31]
        // [2 4] [6 8] = [34 46]
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut out = [0.0f64; 4];
        product(&a, &b, 2, 2, &mut out, &Exact);
        assert_eq!(out, [23.0, 34.0, 31.0, 46.0]);
    }

    #[test]
    fn test_product_non_square() {
        // 2x3 times 3x1
        let a = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let b = [1.0, 1.0, 1.0];
        let mut out = [0.0f32; 2];
        product(&a, &b, 2, 3, &mut out, &Fast);
        assert_eq!(out, [6.0, 15.0]);
    }

    #[test]
    fn test_affine_product_composes_translations() {
        // identity linear part, translations (1, 2) and (10, 20)
        let a = [1.0, 0.0, 0.0, 1.0, 1.0, 2.0];
        let b = [1.0, 0.0, 0.0, 1.0, 10.0, 20.0];
        let mut out = [0.0f64; 6];
        affine_product(&a, &b, 2, &mut out, &Exact);
        assert_eq!(out, [1.0, 0.0, 0.0, 1.0, 11.0, 22.0]);
    }
}
