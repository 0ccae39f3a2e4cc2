//! Rotations fitted to directions: look-along and shortest arc.

use tracing::trace;
use xform_core::Scalar;

use super::Quaternion;
use crate::Vector3;
use crate::rotation;

/// `dot(from, to)` below `-1 + ANTIPARALLEL` is treated as opposite.
const ANTIPARALLEL: f64 = 1e-6;

impl<T: Scalar> Quaternion<T> {
    /// Rotation mapping `dir` onto `-Z` with `up` in the `+Y` half-plane.
    ///
    /// This is the orientation of a view transform: it takes world
    /// directions into a frame where the viewer looks down `-Z`. Neither
    /// input needs to be unit length, but `up` must not be parallel to
    /// `dir`.
    pub fn rotation_look_along(dir: Vector3<T>, up: Vector3<T>) -> Self {
        let dirn = -dir.normalize();
        let left = up.cross(dirn).normalize();
        let upn = dirn.cross(left);
        // basis rows are left, up, -dir
        rotation::quaternion_from_basis(&[
            [left.x, upn.x, dirn.x],
            [left.y, upn.y, dirn.y],
            [left.z, upn.z, dirn.z],
        ])
    }

    /// Post-multiplies [`rotation_look_along`](Self::rotation_look_along).
    #[inline]
    pub fn look_along(&self, dir: Vector3<T>, up: Vector3<T>) -> Self {
        self.multiply(&Self::rotation_look_along(dir, up))
    }

    /// Writes [`look_along`](Self::look_along) into `dest`.
    #[inline]
    pub fn look_along_into(&self, dir: Vector3<T>, up: Vector3<T>, dest: &mut Self) {
        *dest = self.look_along(dir, up);
    }

    /// Shortest-arc rotation turning direction `from` onto `to`.
    ///
    /// Inputs need not be unit length. For opposite directions any axis
    /// perpendicular to `from` works; this picks `(fy, -fx, 0)`, falling
    /// back to `(0, fz, -fy)` when `from` is along Z.
    pub fn rotation_to(from: Vector3<T>, to: Vector3<T>) -> Self {
        let f = from.normalize();
        let t = to.normalize();
        let dot = f.dot(t);
        if dot < T::from_f64(ANTIPARALLEL) - T::ONE {
            let mut axis = Vector3::new(f.y, -f.x, T::ZERO);
            if axis.length_squared() == T::ZERO {
                axis = Vector3::new(T::ZERO, f.z, -f.y);
            }
            trace!(
                dot = dot.as_f64(),
                axis = ?axis.to_array().map(|c| c.as_f64()),
                "rotation_to: antiparallel, half turn about perpendicular axis"
            );
            let axis = axis.normalize();
            return Self::new(axis.x, axis.y, axis.z, T::ZERO);
        }
        let sd2 = ((T::ONE + dot) * T::two()).sqrt();
        let isd2 = T::ONE / sd2;
        let c = f.cross(t);
        Self::new(c.x * isd2, c.y * isd2, c.z * isd2, sd2 * T::half()).normalize()
    }

    /// Post-multiplies [`rotation_to`](Self::rotation_to).
    #[inline]
    pub fn rotate_to(&self, from: Vector3<T>, to: Vector3<T>) -> Self {
        self.multiply(&Self::rotation_to(from, to))
    }

    /// Writes [`rotate_to`](Self::rotate_to) into `dest`.
    #[inline]
    pub fn rotate_to_into(&self, from: Vector3<T>, to: Vector3<T>, dest: &mut Self) {
        *dest = self.rotate_to(from, to);
    }
}
