//! Quaternion interpolation.
//!
//! Three blends between orientations, all taking the shorter arc (the
//! second operand's weight is negated when the dot product is negative):
//!
//! | Method | Speed | Constant angular velocity |
//! |--------|-------|---------------------------|
//! | [`slerp`](Quaternion::slerp) | trig per call | yes |
//! | [`nlerp`](Quaternion::nlerp) | one normalize | no |
//! | [`nlerp_iterative`](Quaternion::nlerp_iterative) | a few normalizes | approximately |
//!
//! The `_many` forms fold a weighted list pairwise, blending each next
//! quaternion in with weight `w1 / (w0 + w1)`.

use tracing::trace;
use xform_core::{DefaultStrategy, MathStrategy, Scalar};

use super::Quaternion;

/// Below this distance of `|cos omega|` from 1 the blend degenerates to
/// linear weights.
const NEAR_PARALLEL: f64 = 1e-6;

/// Upper bound on arc halvings in [`Quaternion::nlerp_iterative`].
const MAX_HALVINGS: u32 = 64;

impl<T: Scalar> Quaternion<T> {
    /// Spherical linear interpolation from `self` (`alpha = 0`) to
    /// `target` (`alpha = 1`).
    ///
    /// Both inputs should be unit quaternions.
    #[inline]
    pub fn slerp(&self, target: &Self, alpha: T) -> Self {
        self.slerp_with(target, alpha, &DefaultStrategy::default())
    }

    /// [`slerp`](Self::slerp) with an explicit strategy.
    pub fn slerp_with<M: MathStrategy>(&self, target: &Self, alpha: T, m: &M) -> Self {
        let cosom = m.fma(
            self.x,
            target.x,
            m.fma(self.y, target.y, m.fma(self.z, target.z, self.w * target.w)),
        );
        let abs_cosom = cosom.abs();
        let (scale0, mut scale1) = if T::ONE - abs_cosom > T::from_f64(NEAR_PARALLEL) {
            let sin_sqr = T::ONE - abs_cosom * abs_cosom;
            let sinom = m.inv_sqrt(sin_sqr);
            let omega = m.atan2(sin_sqr * sinom, abs_cosom);
            (
                m.sin((T::ONE - alpha) * omega) * sinom,
                m.sin(alpha * omega) * sinom,
            )
        } else {
            (T::ONE - alpha, alpha)
        };
        if cosom < T::ZERO {
            scale1 = -scale1;
        }
        Self::new(
            m.fma(scale0, self.x, scale1 * target.x),
            m.fma(scale0, self.y, scale1 * target.y),
            m.fma(scale0, self.z, scale1 * target.z),
            m.fma(scale0, self.w, scale1 * target.w),
        )
    }

    /// Writes the slerp result into `dest`.
    #[inline]
    pub fn slerp_into(&self, target: &Self, alpha: T, dest: &mut Self) {
        *dest = self.slerp(target, alpha);
    }

    /// Weighted spherical blend of several unit quaternions.
    ///
    /// # Panics
    ///
    /// If `qs` is empty or `weights` is shorter than `qs`.
    pub fn slerp_many(qs: &[Self], weights: &[T]) -> Self {
        Self::fold_weighted(qs, weights, |acc, q, t| acc.slerp(q, t))
    }

    /// Linear blend with shortest-arc sign correction, renormalized.
    pub fn nlerp(&self, q: &Self, alpha: T) -> Self {
        self.nlerp_with(q, alpha, &DefaultStrategy::default())
    }

    /// [`nlerp`](Self::nlerp) with an explicit strategy.
    pub fn nlerp_with<M: MathStrategy>(&self, q: &Self, alpha: T, m: &M) -> Self {
        let cosom = self.dot(q);
        let scale0 = T::ONE - alpha;
        let scale1 = if cosom >= T::ZERO { alpha } else { -alpha };
        Self::new(
            m.fma(scale0, self.x, scale1 * q.x),
            m.fma(scale0, self.y, scale1 * q.y),
            m.fma(scale0, self.z, scale1 * q.z),
            m.fma(scale0, self.w, scale1 * q.w),
        )
        .normalize_with(m)
    }

    /// Writes the nlerp result into `dest`.
    #[inline]
    pub fn nlerp_into(&self, q: &Self, alpha: T, dest: &mut Self) {
        *dest = self.nlerp(q, alpha);
    }

    /// Weighted normalized-linear blend of several unit quaternions.
    ///
    /// # Panics
    ///
    /// If `qs` is empty or `weights` is shorter than `qs`.
    pub fn nlerp_many(qs: &[Self], weights: &[T]) -> Self {
        Self::fold_weighted(qs, weights, |acc, q, t| acc.nlerp(q, t))
    }

    /// Slerp approximation by repeated arc halving.
    ///
    /// The interval containing `alpha` is halved with `nlerp` steps until
    /// the endpoints' `|dot|` reaches `dot_threshold`, then a final nlerp
    /// blends within it. Thresholds closer to 1 are more accurate and
    /// slower; `0.9999` is typical. Nearly identical inputs return `self`.
    ///
    /// The loop stops after a fixed number of halvings even if the
    /// threshold is never reached.
    pub fn nlerp_iterative(&self, q: &Self, alpha: T, dot_threshold: T) -> Self {
        self.nlerp_iterative_with(q, alpha, dot_threshold, &DefaultStrategy::default())
    }

    /// [`nlerp_iterative`](Self::nlerp_iterative) with an explicit strategy.
    pub fn nlerp_iterative_with<M: MathStrategy>(
        &self,
        q: &Self,
        alpha: T,
        dot_threshold: T,
        m: &M,
    ) -> Self {
        let mut q1 = *self;
        let mut q2 = *q;
        let mut dot = q1.dot(&q2);
        let mut abs_dot = dot.abs();
        if T::ONE - T::from_f64(NEAR_PARALLEL) < abs_dot {
            trace!(abs_dot = abs_dot.as_f64(), "nlerp_iterative: inputs nearly parallel");
            return *self;
        }

        let half = T::half();
        let mut alpha_n = alpha;
        let mut halvings = 0;
        while abs_dot < dot_threshold && halvings < MAX_HALVINGS {
            let (scale0, scale1) = if dot >= T::ZERO { (half, half) } else { (half, -half) };
            if alpha_n < half {
                q2 = Self::new(
                    m.fma(scale0, q1.x, scale1 * q2.x),
                    m.fma(scale0, q1.y, scale1 * q2.y),
                    m.fma(scale0, q1.z, scale1 * q2.z),
                    m.fma(scale0, q1.w, scale1 * q2.w),
                )
                .normalize_with(m);
                alpha_n = alpha_n + alpha_n;
            } else {
                q1 = Self::new(
                    m.fma(scale0, q1.x, scale1 * q2.x),
                    m.fma(scale0, q1.y, scale1 * q2.y),
                    m.fma(scale0, q1.z, scale1 * q2.z),
                    m.fma(scale0, q1.w, scale1 * q2.w),
                )
                .normalize_with(m);
                alpha_n = alpha_n + alpha_n - T::ONE;
            }
            dot = q1.dot(&q2);
            abs_dot = dot.abs();
            halvings += 1;
        }
        trace!(halvings, "nlerp_iterative: converged");

        let scale0 = T::ONE - alpha_n;
        let scale1 = if dot >= T::ZERO { alpha_n } else { -alpha_n };
        Self::new(
            m.fma(scale0, q1.x, scale1 * q2.x),
            m.fma(scale0, q1.y, scale1 * q2.y),
            m.fma(scale0, q1.z, scale1 * q2.z),
            m.fma(scale0, q1.w, scale1 * q2.w),
        )
        .normalize_with(m)
    }

    /// Writes the iterative nlerp result into `dest`.
    #[inline]
    pub fn nlerp_iterative_into(&self, q: &Self, alpha: T, dot_threshold: T, dest: &mut Self) {
        *dest = self.nlerp_iterative(q, alpha, dot_threshold);
    }

    /// Weighted iterative-nlerp blend of several unit quaternions.
    ///
    /// # Panics
    ///
    /// If `qs` is empty or `weights` is shorter than `qs`.
    pub fn nlerp_iterative_many(qs: &[Self], weights: &[T], dot_threshold: T) -> Self {
        Self::fold_weighted(qs, weights, |acc, q, t| acc.nlerp_iterative(q, t, dot_threshold))
    }

    fn fold_weighted<F>(qs: &[Self], weights: &[T], blend: F) -> Self
    where
        F: Fn(&Self, &Self, T) -> Self,
    {
        let mut acc = qs[0];
        let mut w = weights[0];
        for (q, &w1) in qs.iter().zip(&weights[..qs.len()]).skip(1) {
            let rw1 = w1 / (w + w1);
            w += w1;
            acc = blend(&acc, q, rw1);
        }
        acc
    }
}
