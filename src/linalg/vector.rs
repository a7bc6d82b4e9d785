/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

use linmin_slice_math::{vdot, vdist, vinf_norm, vlincomb, vsqnorm, v, V};

/// The vector-space capability consumed by objectives and solvers.
///
/// Every operation returns a fresh value; nothing here mutates `self`.
/// Two vectors combined by any method must live in the same [`Vector::Space`].
/// Implementations are free to panic when they don't, since solvers check
/// spaces up front and a mismatch deeper down is a bug.
pub trait Vector: Clone + fmt::Debug {
    /// Identifies the set of vectors that may be mixed with this one.
    type Space: Clone + PartialEq + fmt::Debug + fmt::Display;

    fn space(&self) -> Self::Space;

    fn scale(&self, c: f64) -> Self;

    /// `c1 * v1 + c2 * v2`
    fn combine_linear(c1: f64, v1: &Self, c2: f64, v2: &Self) -> Self;

    fn dot(&self, other: &Self) -> f64;

    /// Max absolute element.
    fn inf_norm(&self) -> f64;

    fn subtract(&self, other: &Self) -> Self
    { Self::combine_linear(1.0, self, -1.0, other) }

    fn sqnorm(&self) -> f64 { self.dot(self) }

    /// Euclidean norm.
    fn norm(&self) -> f64 { self.sqnorm().sqrt() }

    /// Euclidean distance.
    fn distance(&self, other: &Self) -> f64 { self.subtract(other).norm() }
}

/// The space of `Vec<f64>` with a given length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dim(pub usize);

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "R^{}", self.0) }
}

impl Vector for Vec<f64> {
    type Space = Dim;

    fn space(&self) -> Dim { Dim(self.len()) }

    fn scale(&self, c: f64) -> Self {
        let V(out) = c * v(self);
        out
    }

    fn combine_linear(c1: f64, v1: &Self, c2: f64, v2: &Self) -> Self
    { vlincomb(c1, v1, c2, v2) }

    fn subtract(&self, other: &Self) -> Self {
        let V(out) = v(self) - v(other);
        out
    }

    fn dot(&self, other: &Self) -> f64 { vdot(self, other) }
    fn sqnorm(&self) -> f64 { vsqnorm(self) }
    fn inf_norm(&self) -> f64 { vinf_norm(self) }
    fn distance(&self, other: &Self) -> f64 { vdist(self, other) }
}
