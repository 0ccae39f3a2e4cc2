//! Boilerplate generators shared by the value types.

/// Component-wise arithmetic for a struct whose fields are all `T`.
///
/// Generates `+ - * /` between values (component-wise), `* /` by a scalar,
/// negation, the compound-assignment forms and `f32 * V` / `f64 * V`.
macro_rules! impl_componentwise_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl<T: Scalar> ::std::ops::Add for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Sub for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Mul for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Div for $ty<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Mul<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Div<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Neg for $ty<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::AddAssign for $ty<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl<T: Scalar> ::std::ops::SubAssign for $ty<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl<T: Scalar> ::std::ops::MulAssign<T> for $ty<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$f *= rhs;)+
            }
        }

        impl ::std::ops::Mul<$ty<f32>> for f32 {
            type Output = $ty<f32>;

            #[inline]
            fn mul(self, rhs: $ty<f32>) -> $ty<f32> {
                rhs * self
            }
        }

        impl ::std::ops::Mul<$ty<f64>> for f64 {
            type Output = $ty<f64>;

            #[inline]
            fn mul(self, rhs: $ty<f64>) -> $ty<f64> {
                rhs * self
            }
        }
    };
}

/// `approx` comparisons applied field by field.
macro_rules! impl_approx_eq {
    ($ty:ident { $($f:ident),+ }) => {
        impl<T: Scalar> ::approx::AbsDiffEq for $ty<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                <T as ::approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $(::approx::AbsDiffEq::abs_diff_eq(&self.$f, &other.$f, epsilon))&&+
            }
        }

        impl<T: Scalar> ::approx::RelativeEq for $ty<T> {
            #[inline]
            fn default_max_relative() -> T {
                <T as ::approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $(::approx::RelativeEq::relative_eq(&self.$f, &other.$f, epsilon, max_relative))&&+
            }
        }

        impl<T: Scalar> ::approx::UlpsEq for $ty<T> {
            #[inline]
            fn default_max_ulps() -> u32 {
                <T as ::approx::UlpsEq>::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                $(::approx::UlpsEq::ulps_eq(&self.$f, &other.$f, epsilon, max_ulps))&&+
            }
        }
    };
}

/// Component indexing by position, panicking out of range, plus the
/// fallible `get`/`set` pair.
macro_rules! impl_component_index {
    ($ty:ident, $len:expr, { $($i:literal => $f:ident),+ }) => {
        impl<T: Scalar> ::std::ops::Index<usize> for $ty<T> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($ty), i),
                }
            }
        }

        impl<T: Scalar> ::std::ops::IndexMut<usize> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($ty), i),
                }
            }
        }

        impl<T: Scalar> $ty<T> {
            /// Returns component `index`, or an error when out of range.
            #[inline]
            pub fn get(&self, index: usize) -> ::xform_core::Result<T> {
                match index {
                    $($i => Ok(self.$f),)+
                    _ => Err(::xform_core::Error::ComponentOutOfRange { index, len: $len }),
                }
            }

            /// Sets component `index`, or returns an error when out of range.
            #[inline]
            pub fn set(&mut self, index: usize, value: T) -> ::xform_core::Result<()> {
                match index {
                    $($i => self.$f = value,)+
                    _ => return Err(::xform_core::Error::ComponentOutOfRange { index, len: $len }),
                }
                Ok(())
            }
        }
    };
}

/// `Display` as a parenthesised, comma separated component list.
macro_rules! impl_tuple_display {
    ($ty:ident { $($f:ident),+ }) => {
        impl<T: Scalar> ::std::fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                crate::display::write_tuple(f, &[$(self.$f),+])
            }
        }
    };
}

/// Element access, flat conversion, scalar scaling and `Display` for a
/// column-major matrix with fields named `m{col}{row}`.
///
/// Fields must be listed in column-major order.
macro_rules! impl_matrix_common {
    ($ty:ident, $cols:literal x $rows:literal, { $(($c:literal, $r:literal) => $f:ident),+ $(,)? }) => {
        impl<T: Scalar> $ty<T> {
            /// Number of columns.
            pub const COLUMNS: usize = $cols;

            /// Number of rows.
            pub const ROWS: usize = $rows;

            /// Creates from elements in column-major order.
            #[inline]
            pub fn from_cols_array(a: [T; $cols * $rows]) -> Self {
                let [$($f),+] = a;
                Self { $($f),+ }
            }

            /// Elements in column-major order.
            #[inline]
            pub fn to_cols_array(&self) -> [T; $cols * $rows] {
                [$(self.$f),+]
            }

            /// Element at `(column, row)`, or an error when out of range.
            #[inline]
            pub fn get(&self, column: usize, row: usize) -> ::xform_core::Result<T> {
                match (column, row) {
                    $(($c, $r) => Ok(self.$f),)+
                    _ => Err(::xform_core::Error::IndexOutOfRange {
                        column,
                        row,
                        columns: $cols,
                        rows: $rows,
                    }),
                }
            }

            /// Sets the element at `(column, row)`, or returns an error when
            /// out of range.
            #[inline]
            pub fn set(&mut self, column: usize, row: usize, value: T) -> ::xform_core::Result<()> {
                match (column, row) {
                    $(($c, $r) => self.$f = value,)+
                    _ => {
                        return Err(::xform_core::Error::IndexOutOfRange {
                            column,
                            row,
                            columns: $cols,
                            rows: $rows,
                        });
                    }
                }
                Ok(())
            }

            /// Returns true if all elements are finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                $(self.$f.is_finite())&&+
            }
        }

        impl<T: Scalar> ::std::ops::Index<(usize, usize)> for $ty<T> {
            type Output = T;

            #[inline]
            fn index(&self, (column, row): (usize, usize)) -> &T {
                match (column, row) {
                    $(($c, $r) => &self.$f,)+
                    _ => panic!("{} index out of bounds: ({}, {})", stringify!($ty), column, row),
                }
            }
        }

        impl<T: Scalar> ::std::ops::IndexMut<(usize, usize)> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
                match (column, row) {
                    $(($c, $r) => &mut self.$f,)+
                    _ => panic!("{} index out of bounds: ({}, {})", stringify!($ty), column, row),
                }
            }
        }

        impl<T: Scalar> ::std::ops::Mul<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self { $($f: self.$f * s),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Add for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::ops::Sub for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Scalar> ::std::fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                crate::display::write_rows(f, $cols, $rows, |c, r| self[(c, r)])
            }
        }

        impl<T: Scalar> From<[T; $cols * $rows]> for $ty<T> {
            #[inline]
            fn from(a: [T; $cols * $rows]) -> Self {
                Self::from_cols_array(a)
            }
        }

        $crate::macros::impl_approx_eq!($ty { $($f),+ });
    };
}

pub(crate) use impl_approx_eq;
pub(crate) use impl_component_index;
pub(crate) use impl_componentwise_ops;
pub(crate) use impl_matrix_common;
pub(crate) use impl_tuple_display;
