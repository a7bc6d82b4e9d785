/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(dead_code)]

use linmin::prelude::*;
use linmin::linalg::{check_input, Dim, ShapeError};
use linmin::minimize::SolverSettings;

pub fn random_vec(n: usize) -> Vec<f64> {
    (0..n).map(|_| 2.0 * rand::random::<f64>() - 1.0).collect()
}

/// A well-conditioned square operator, and a target with a known exact solution.
pub fn random_problem(n: usize) -> (DenseMatrix, Vec<f64>, Vec<f64>) {
    let mut data = random_vec(n * n);
    for i in 0..n {
        data[i * n + i] += n as f64;
    }
    let a = DenseMatrix::from_row_major_data((n, n), data);
    let solution = random_vec(n);
    let b = a.apply(&solution, false).unwrap();
    (a, b, solution)
}

/// One of each solver, configured for exact line searches where they have a choice.
pub fn exact_solvers() -> Vec<SolverSettings> {
    vec![
        SolverSettings::GradientDescent(GradientDescent::new(true, 0.0, false)),
        SolverSettings::AcceleratedGradientDescent(AcceleratedGradientDescent::new(true, 0.0, false)),
        SolverSettings::ConjugateGradient(ConjugateGradient::new()),
    ]
}

/// Every configuration a solver can be put in.
pub fn all_solvers(step_size: f64) -> Vec<SolverSettings> {
    let mut out = exact_solvers();
    for &backtrack in &[false, true] {
        out.push(SolverSettings::GradientDescent(GradientDescent::new(false, step_size, backtrack)));
        out.push(SolverSettings::AcceleratedGradientDescent(AcceleratedGradientDescent::new(false, step_size, backtrack)));
    }
    out
}

/// Fails every product with a shape error.
#[derive(Debug, Clone)]
pub struct BrokenOperator(pub usize);

impl LinearOperator<Vec<f64>> for BrokenOperator {
    fn domain(&self) -> Dim { Dim(self.0) }
    fn codomain(&self) -> Dim { Dim(self.0) }

    fn apply(&self, x: &Vec<f64>, transpose: bool) -> Result<Vec<f64>, ShapeError> {
        check_input(self, x, transpose)?;
        Err(ShapeError {
            expected: "a working operator".to_string(),
            found: x.space().to_string(),
            transpose,
        })
    }
}
