//! Runtime options read from the environment.
//!
//! | Variable              | Values                     | Effect                          |
//! |-----------------------|----------------------------|---------------------------------|
//! | `XFORM_FASTMATH`      | `1`/`true`, `0`/`false`    | [`Precision::Fast`] or `Exact`  |
//! | `XFORM_FORMAT_DIGITS` | `0..=17`                   | fractional digits for [`Options::format`] |
//!
//! Options are plain values. Nothing here installs global state: callers
//! read them once and pass [`Options::precision`] to the `*_with` variants
//! of the math operations. In `xform-math` those cover matrix and
//! quaternion multiplication, quaternion normalization, vector transforms,
//! `slerp`/`nlerp`/`nlerp_iterative`, axis-angle construction and rotation
//! extraction from scaled matrices. The plain forms use [`DefaultStrategy`].
//!
//! [`DefaultStrategy`]: crate::DefaultStrategy
//!
//! # Usage
//!
//! ```rust
//! use xform_core::{Options, Precision};
//!
//! let opts = Options::from_lookup(|name| match name {
//!     "XFORM_FASTMATH" => Some("1".into()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(opts.precision, Precision::Fast);
//! ```

use std::env;
use std::fmt::Display;

use tracing::debug;

use crate::{Error, Precision, Result};

/// Environment variable selecting [`Precision::Fast`].
pub const ENV_FASTMATH: &str = "XFORM_FASTMATH";

/// Environment variable setting [`Options::format_digits`].
pub const ENV_FORMAT_DIGITS: &str = "XFORM_FORMAT_DIGITS";

/// Default number of fractional digits when formatting.
pub const DEFAULT_FORMAT_DIGITS: usize = 3;

/// Largest accepted `XFORM_FORMAT_DIGITS`.
pub const MAX_FORMAT_DIGITS: usize = 17;

/// Library options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Strategy for trig/sqrt/fma in the `*_with` operations.
    pub precision: Precision,
    /// Fractional digits used by [`Options::format`].
    pub format_digits: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: Precision::Exact,
            format_digits: DEFAULT_FORMAT_DIGITS,
        }
    }
}

impl Options {
    /// Reads options from process environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads options through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(v) = lookup(ENV_FASTMATH) {
            opts.precision = if parse_flag(ENV_FASTMATH, &v)? {
                Precision::Fast
            } else {
                Precision::Exact
            };
            debug!(precision = ?opts.precision, "{} override", ENV_FASTMATH);
        }

        if let Some(v) = lookup(ENV_FORMAT_DIGITS) {
            opts.format_digits = v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&d| d <= MAX_FORMAT_DIGITS)
                .ok_or_else(|| invalid(ENV_FORMAT_DIGITS, &v))?;
            debug!(digits = opts.format_digits, "{} override", ENV_FORMAT_DIGITS);
        }

        Ok(opts)
    }

    /// Formats a value with [`format_digits`](Options::format_digits)
    /// fractional digits.
    ///
    /// Works with every xform value type, since their `Display`
    /// implementations honour the formatter precision.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_core::Options;
    ///
    /// let opts = Options { format_digits: 2, ..Options::default() };
    /// assert_eq!(opts.format(&1.23456f32), "1.23");
    /// ```
    pub fn format<D: Display + ?Sized>(&self, value: &D) -> String {
        format!("{:.*}", self.format_digits, value)
    }
}

fn parse_flag(name: &'static str, v: &str) -> Result<bool> {
    let t = v.trim();
    if t == "1" || t.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if t == "0" || t.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid(name, v))
    }
}

fn invalid(name: &'static str, v: &str) -> Error {
    tracing::warn!(name, value = v, "rejecting option value");
    Error::InvalidOption {
        name,
        value: v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let opts = Options::from_lookup(lookup(&[])).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.format_digits, DEFAULT_FORMAT_DIGITS);
    }

    #[test]
    fn test_fastmath_flag() {
        let opts = Options::from_lookup(lookup(&[(ENV_FASTMATH, "TRUE")])).unwrap();
        assert_eq!(opts.precision, Precision::Fast);

        let opts = Options::from_lookup(lookup(&[(ENV_FASTMATH, "0")])).unwrap();
        assert_eq!(opts.precision, Precision::Exact);
    }

    #[test]
    fn test_invalid_flag() {
        let err = Options::from_lookup(lookup(&[(ENV_FASTMATH, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOption {
                name: ENV_FASTMATH,
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn test_format_digits() {
        let opts = Options::from_lookup(lookup(&[(ENV_FORMAT_DIGITS, " 5 ")])).unwrap();
        assert_eq!(opts.format_digits, 5);
        assert_eq!(opts.format(&0.5f64), "0.50000");

        assert!(Options::from_lookup(lookup(&[(ENV_FORMAT_DIGITS, "18")])).is_err());
        assert!(Options::from_lookup(lookup(&[(ENV_FORMAT_DIGITS, "-1")])).is_err());
    }
}
