/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Vector;

/// A possibly-implicit matrix that knows how to multiply vectors.
///
/// Only the products `A x` and `A^T y` are ever required, so implementors
/// need not store anything resembling a matrix.
pub trait LinearOperator<V: Vector> {
    /// Space of the `x` in `A x`.
    fn domain(&self) -> V::Space;

    /// Space of the `y` in `A^T y`.
    fn codomain(&self) -> V::Space;

    /// Computes `A x`, or `A^T x` when `transpose` is set.
    ///
    /// Fails if `x` is not in the domain (resp. codomain).
    fn apply(&self, x: &V, transpose: bool) -> Result<V, ShapeError>;
}

impl<'a, V: Vector, A: LinearOperator<V> + ?Sized> LinearOperator<V> for &'a A {
    fn domain(&self) -> V::Space { (**self).domain() }
    fn codomain(&self) -> V::Space { (**self).codomain() }
    fn apply(&self, x: &V, transpose: bool) -> Result<V, ShapeError>
    { (**self).apply(x, transpose) }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} expected a vector in {expected}, got one in {found}", product_name(.transpose))]
pub struct ShapeError {
    pub expected: String,
    pub found: String,
    pub transpose: bool,
}

fn product_name(transpose: &bool) -> &'static str {
    match *transpose {
        false => "A x",
        true => "A^T x",
    }
}

/// Validates the input to [`LinearOperator::apply`].
///
/// Implementors will typically call this before doing any arithmetic.
pub fn check_input<V, A>(op: &A, x: &V, transpose: bool) -> Result<(), ShapeError>
where
    V: Vector,
    A: LinearOperator<V> + ?Sized,
{
    let expected = match transpose {
        false => op.domain(),
        true => op.codomain(),
    };
    let found = x.space();
    if found != expected {
        return Err(ShapeError {
            expected: expected.to_string(),
            found: found.to_string(),
            transpose,
        });
    }
    Ok(())
}
