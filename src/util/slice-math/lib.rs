/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Element-wise arithmetic on `f64` slices, backing `Vec<f64>` as a linmin vector.

// Restricted to 'f64'; the vector-space abstraction in linmin-linalg
// is the place for genericity, not here.

/// Wrapper that gives a slice or `Vec` element-wise `+ - *`.
///
/// Construct with [`v`].
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct V<T: AllowedV>(pub T);
pub type VOwn = V<Vec<f64>>;
pub type VRef<'a> = V<&'a [f64]>;

/// Restricts `V` to owned vectors and plain slices (not `&Vec<f64>`).
///
/// `v(&vec)` produces the slice form.
pub trait AllowedV {}
impl AllowedV for Vec<f64> {}
impl<'a> AllowedV for &'a [f64] {}

//------------------------
// Math ops

use std::ops::{Add, Sub, Mul, Neg, Deref};

macro_rules! impl_binary {
    ($Op:ident::$op:ident) => {
        // scalar (op) vector
        impl $Op<VOwn> for f64 {
            type Output = VOwn;
            fn $op(self, mut u: VOwn) -> VOwn {
                for x in &mut u.0 { *x = self.$op(*x); }
                u
            }
        }

        impl<'a> $Op<VRef<'a>> for f64 {
            type Output = VOwn;
            fn $op(self, u: VRef<'a>) -> VOwn {
                V(u.0.iter().map(|&x| self.$op(x)).collect())
            }
        }

        // vector (op) scalar
        impl $Op<f64> for VOwn {
            type Output = VOwn;
            fn $op(mut self, s: f64) -> VOwn {
                for x in &mut self.0 { *x = x.$op(s); }
                self
            }
        }

        impl<'a> $Op<f64> for VRef<'a> {
            type Output = VOwn;
            fn $op(self, s: f64) -> VOwn {
                V(self.0.iter().map(|&x| x.$op(s)).collect())
            }
        }

        // vector (op) vector
        impl $Op<VOwn> for VOwn {
            type Output = VOwn;
            fn $op(mut self, u: VOwn) -> VOwn {
                assert_eq!(self.len(), u.len());
                for (a, b) in self.0.iter_mut().zip(u.0) { *a = a.$op(b); }
                self
            }
        }

        impl<'b> $Op<VRef<'b>> for VOwn {
            type Output = VOwn;
            fn $op(mut self, u: VRef<'b>) -> VOwn {
                assert_eq!(self.len(), u.len());
                for (a, &b) in self.0.iter_mut().zip(u.0) { *a = a.$op(b); }
                self
            }
        }

        impl<'a> $Op<VOwn> for VRef<'a> {
            type Output = VOwn;
            fn $op(self, u: VOwn) -> VOwn { self.$op(v(&u.0[..])) }
        }

        impl<'a, 'b> $Op<VRef<'b>> for VRef<'a> {
            type Output = VOwn;
            fn $op(self, u: VRef<'b>) -> VOwn {
                assert_eq!(self.len(), u.len());
                V(self.0.iter().zip(u.0).map(|(&a, &b)| a.$op(b)).collect())
            }
        }
    }
}

impl_binary!(Add::add);
impl_binary!(Sub::sub);
impl_binary!(Mul::mul);

impl Neg for VOwn {
    type Output = VOwn;
    fn neg(self) -> VOwn { -1.0 * self }
}

impl<'a> Neg for VRef<'a> {
    type Output = VOwn;
    fn neg(self) -> VOwn { -1.0 * self }
}

// so a `V` can be handed to the free functions below
impl Deref for VOwn {
    type Target = [f64];
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<'a> Deref for VRef<'a> {
    type Target = [f64];
    fn deref(&self) -> &Self::Target { self.0 }
}

impl IntoIterator for VOwn {
    type IntoIter = std::vec::IntoIter<f64>;
    type Item = f64;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

//------------------------
// Construction

pub fn v<W: MakeV>(w: W) -> W::Output { w.make_v() }

/// Conversions accepted by [`v`].
pub trait MakeV {
    type Output;
    fn make_v(self) -> Self::Output;
}

impl MakeV for Vec<f64> {
    type Output = VOwn;
    fn make_v(self) -> VOwn { V(self) }
}

impl<'a> MakeV for &'a [f64] {
    type Output = VRef<'a>;
    fn make_v(self) -> VRef<'a> { V(self) }
}

impl<'a> MakeV for &'a Vec<f64> {
    type Output = VRef<'a>;
    fn make_v(self) -> VRef<'a> { V(&self[..]) }
}

//------------------------
// Math

pub fn vdot(u: &[f64], w: &[f64]) -> f64 {
    assert_eq!(u.len(), w.len());
    u.iter().zip(w).map(|(a, b)| a * b).sum()
}

pub fn vsqnorm(u: &[f64]) -> f64 { vdot(u, u) }
pub fn vnorm(u: &[f64]) -> f64 { vsqnorm(u).sqrt() }

/// Max absolute value. Zero for an empty slice.
pub fn vinf_norm(u: &[f64]) -> f64 {
    u.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Euclidean distance between two points.
pub fn vdist(u: &[f64], w: &[f64]) -> f64 {
    assert_eq!(u.len(), w.len());
    u.iter().zip(w).map(|(a, b)| (a - b) * (a - b)).sum::<f64>().sqrt()
}

/// Computes `c1 * u + c2 * w` in a single pass.
pub fn vlincomb(c1: f64, u: &[f64], c2: f64, w: &[f64]) -> Vec<f64> {
    assert_eq!(u.len(), w.len());
    u.iter().zip(w).map(|(a, b)| c1 * a + c2 * b).collect()
}

//---------------------------
