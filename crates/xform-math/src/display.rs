//! Text formatting shared by the value types.
//!
//! Formatter precision (`{:.3}`) is forwarded to every component, so
//! [`Options::format`](xform_core::Options::format) works on all types.

use std::fmt::{self, Formatter};

use xform_core::Scalar;

fn write_scalar<T: Scalar>(f: &mut Formatter<'_>, v: T) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, v),
        None => write!(f, "{}", v),
    }
}

/// Writes `(a, b, c)`.
pub(crate) fn write_tuple<T: Scalar>(f: &mut Formatter<'_>, values: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_scalar(f, v)?;
    }
    f.write_str(")")
}

/// Writes a matrix row by row, one `[..]` line per row.
///
/// `at(column, row)` reads an element.
pub(crate) fn write_rows<T, F>(
    f: &mut Formatter<'_>,
    columns: usize,
    rows: usize,
    at: F,
) -> fmt::Result
where
    T: Scalar,
    F: Fn(usize, usize) -> T,
{
    for row in 0..rows {
        if row > 0 {
            f.write_str("\n")?;
        }
        f.write_str("[")?;
        for col in 0..columns {
            if col > 0 {
                f.write_str(" ")?;
            }
            write_scalar(f, at(col, row))?;
        }
        f.write_str("]")?;
    }
    Ok(())
}
