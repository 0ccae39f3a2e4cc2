//! Error types for xform.
//!
//! The numeric core never returns errors: singular matrices, zero-length
//! quaternions and out-of-domain trig inputs propagate NaN/infinity per
//! IEEE-754. Errors only come from the accessor and interop layers:
//!
//! - Fallible component accessors (`get`/`set` with a runtime index)
//! - Buffer marshalling (`xform-buffer`)
//! - Environment configuration ([`Options`](crate::Options))
//!
//! # Usage
//!
//! ```rust
//! use xform_core::{Error, Result};
//!
//! fn check_column(column: usize) -> Result<()> {
//!     if column >= 4 {
//!         return Err(Error::IndexOutOfRange {
//!             column,
//!             row: 0,
//!             columns: 4,
//!             rows: 4,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_column(4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the accessor, marshalling and configuration layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Matrix element selector outside the matrix shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_core::Error;
    ///
    /// let err = Error::IndexOutOfRange { column: 3, row: 0, columns: 3, rows: 3 };
    /// assert!(err.to_string().contains("3x3"));
    /// ```
    #[error("element ({column}, {row}) out of range for {columns}x{rows} matrix")]
    IndexOutOfRange {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
        /// Number of columns.
        columns: usize,
        /// Number of rows.
        rows: usize,
    },

    /// Vector/quaternion component index outside `0..len`.
    #[error("component {index} out of range for {len}-component value")]
    ComponentOutOfRange {
        /// Requested component.
        index: usize,
        /// Number of components.
        len: usize,
    },

    /// Destination or source buffer cannot hold the value at the offset.
    ///
    /// `needed` and `len` are in buffer elements (bytes for byte buffers).
    #[error("buffer too small: {needed} elements needed at offset {offset}, buffer holds {len}")]
    BufferTooSmall {
        /// Start offset requested by the caller.
        offset: usize,
        /// Elements the value occupies.
        needed: usize,
        /// Buffer length.
        len: usize,
    },

    /// Environment option with an unparseable or out-of-range value.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOption {
        /// Environment variable name.
        name: &'static str,
        /// Raw value found.
        value: String,
    },
}

impl Error {
    /// Checks that `len` elements can hold `needed` elements starting at `offset`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_core::Error;
    ///
    /// assert!(Error::check_buffer(2, 4, 6).is_ok());
    /// assert!(Error::check_buffer(3, 4, 6).is_err());
    /// ```
    #[inline]
    pub fn check_buffer(offset: usize, needed: usize, len: usize) -> crate::Result<()> {
        match offset.checked_add(needed) {
            Some(end) if end <= len => Ok(()),
            _ => Err(Error::BufferTooSmall { offset, needed, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_index() {
        let err = Error::IndexOutOfRange {
            column: 4,
            row: 1,
            columns: 4,
            rows: 3,
        };
        assert_eq!(err.to_string(), "element (4, 1) out of range for 4x3 matrix");
    }

    #[test]
    fn test_display_buffer() {
        let err = Error::BufferTooSmall {
            offset: 2,
            needed: 16,
            len: 10,
        };
        assert!(err.to_string().contains("16 elements needed at offset 2"));
    }

    #[test]
    fn test_check_buffer_overflow() {
        assert!(Error::check_buffer(usize::MAX, 2, 10).is_err());
        assert!(Error::check_buffer(0, 0, 0).is_ok());
    }
}
