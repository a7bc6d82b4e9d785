/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Objectives and operators used only by tests.

use std::cell::Cell;

use linmin_linalg::{check_input, DenseMatrix, Dim, LinearOperator, ShapeError, Vector};

use crate::{Objective, QuadraticObjective};

pub fn random_vec(n: usize) -> Vec<f64> {
    (0..n).map(|_| 2.0 * rand::random::<f64>() - 1.0).collect()
}

/// A random, diagonally dominant (hence well-conditioned) square matrix,
/// and a random target.
pub fn random_problem(n: usize) -> (DenseMatrix, Vec<f64>) {
    let mut data = random_vec(n * n);
    for i in 0..n {
        data[i * n + i] += n as f64;
    }
    (DenseMatrix::from_row_major_data((n, n), data), random_vec(n))
}

/// `sum_i (x_i - c_i)^2 + (x_i - c_i)^4`
///
/// Smooth, convex, minimized at `c`, and not quadratic.
#[derive(Debug, Clone)]
pub struct Quartic {
    pub center: Vec<f64>,
}

impl Objective<Vec<f64>> for Quartic {
    type Error = ShapeError;

    fn vector_space(&self) -> Dim { Dim(self.center.len()) }

    fn value(&self, x: &Vec<f64>) -> Result<f64, ShapeError> {
        self.check(x)?;
        Ok(x.iter().zip(&self.center).map(|(x, c)| {
            let d = x - c;
            d * d + d * d * d * d
        }).sum())
    }

    fn diff(&self, x: &Vec<f64>) -> Result<(f64, Vec<f64>), ShapeError> {
        let value = self.value(x)?;
        let gradient = x.iter().zip(&self.center).map(|(x, c)| {
            let d = x - c;
            2.0 * d + 4.0 * d * d * d
        }).collect();
        Ok((value, gradient))
    }
}

impl Quartic {
    fn check(&self, x: &Vec<f64>) -> Result<(), ShapeError> {
        match x.len() == self.center.len() {
            true => Ok(()),
            false => Err(ShapeError {
                expected: self.vector_space().to_string(),
                found: Dim(x.len()).to_string(),
                transpose: false,
            }),
        }
    }
}

/// Counts calls to each method of an objective.
#[derive(Debug)]
pub struct Counting<O> {
    pub inner: O,
    pub values: Cell<u32>,
    pub diffs: Cell<u32>,
    pub line_searches: Cell<u32>,
}

impl<O> Counting<O> {
    pub fn new(inner: O) -> Self {
        Counting {
            inner,
            values: Cell::new(0),
            diffs: Cell::new(0),
            line_searches: Cell::new(0),
        }
    }
}

fn bump(cell: &Cell<u32>) { cell.set(cell.get() + 1) }

impl<O: Objective<Vec<f64>>> Objective<Vec<f64>> for Counting<O> {
    type Error = O::Error;

    fn vector_space(&self) -> Dim { self.inner.vector_space() }

    fn value(&self, x: &Vec<f64>) -> Result<f64, O::Error> {
        bump(&self.values);
        self.inner.value(x)
    }

    fn diff(&self, x: &Vec<f64>) -> Result<(f64, Vec<f64>), O::Error> {
        bump(&self.diffs);
        self.inner.diff(x)
    }
}

impl<O: QuadraticObjective<Vec<f64>>> QuadraticObjective<Vec<f64>> for Counting<O> {
    fn line_search(&self, position: &Vec<f64>, direction: &Vec<f64>) -> Result<f64, O::Error> {
        bump(&self.line_searches);
        self.inner.line_search(position, direction)
    }
}

/// An operator whose products always fail.
#[derive(Debug, Clone)]
pub struct BrokenOperator(pub usize);

impl LinearOperator<Vec<f64>> for BrokenOperator {
    fn domain(&self) -> Dim { Dim(self.0) }
    fn codomain(&self) -> Dim { Dim(self.0) }

    fn apply(&self, x: &Vec<f64>, transpose: bool) -> Result<Vec<f64>, ShapeError> {
        check_input(self, x, transpose)?;
        Err(ShapeError {
            expected: format!("R^{} (broken)", self.0),
            found: x.space().to_string(),
            transpose,
        })
    }
}
