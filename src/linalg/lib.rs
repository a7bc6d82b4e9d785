/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The capabilities that linmin's solvers require of vectors and matrices.
//!
//! Solvers never look inside a vector; they only need the arithmetic in [`Vector`].
//! Likewise, objectives only need matrix-vector products, which are provided by
//! a [`LinearOperator`].  Concrete dense and sparse operators are provided here
//! for `Vec<f64>`, but users may supply their own (e.g. a matrix-free operator).

pub use crate::vector::{Vector, Dim};
mod vector;

pub use crate::operator::{LinearOperator, ShapeError, check_input};
mod operator;

pub use crate::dense::DenseMatrix;
mod dense;

pub use crate::csr::CsrMatrix;
mod csr;
