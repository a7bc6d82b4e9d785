/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Iterative first-order minimization of smooth objectives, with a focus on
//! (ridge) least squares over an arbitrary linear operator.
//!
//! ```
//! use linmin::prelude::*;
//!
//! let a = DenseMatrix::eye(2);
//! let objective = Regression::new(&a, vec![3.0, 4.0]).unwrap();
//! let solver = GradientDescent::new(true, 0.0, false);
//! let out = solver.solve(&objective, &vec![0.0, 0.0], &Default::default(), None, false).unwrap();
//! assert!(out.position.distance(&vec![3.0, 4.0]) < 1e-12);
//! ```

pub use linmin_slice_math as slice_math;
pub use linmin_linalg as linalg;
pub use linmin_minimize as minimize;
pub use linmin_config as config;

pub mod prelude {
    pub use linmin_linalg::{Vector, LinearOperator, DenseMatrix, CsrMatrix};
    pub use linmin_minimize::{Objective, QuadraticObjective, Regression, RidgeRegression};
    pub use linmin_minimize::{Solver, GradientDescent, AcceleratedGradientDescent, ConjugateGradient};
    pub use linmin_minimize::{TerminationCriteria, IterationSummary, Observer, Failure};
    pub use linmin_config::{Settings, YamlRead};
}
