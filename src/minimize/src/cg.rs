/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Nonlinear conjugate gradient (Fletcher-Reeves).

use linmin_linalg::Vector;

use crate::driver::{drive, Output, Solver};
use crate::errors::{Failure, ResultExt};
use crate::reporting::Observer;
use crate::{QuadraticObjective, TerminationCriteria};

/// Conjugate gradient with exact line searches.
///
/// With `delta_k = -g_k`, the search direction is
///
/// ```text
/// s_0 = delta_0
/// s_k = delta_k + beta_k s_{k-1},     beta_k = |delta_k|^2 / |delta_{k-1}|^2
/// ```
///
/// There is no restart policy. A degenerate line search is a hard error.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ConjugateGradient {}

impl ConjugateGradient {
    pub fn new() -> Self { ConjugateGradient {} }
}

impl<V, O> Solver<V, O> for ConjugateGradient
where
    V: Vector,
    O: QuadraticObjective<V> + ?Sized,
{
    fn solve(
        &self,
        objective: &O,
        initial: &V,
        criteria: &TerminationCriteria,
        observer: Option<&mut dyn Observer>,
        verbose: bool,
    ) -> Result<Output<V>, Failure<O::Error>> {
        // search direction, and |delta|^2 from the iteration that produced it
        let mut last: Option<(V, f64)> = None;

        drive("Conjugate gradient", objective, initial, criteria, observer, verbose, |state| {
            let delta = state.gradient.scale(-1.0);
            let delta_sqnorm = delta.sqnorm();

            let direction = match last.take() {
                None => delta,
                Some((prev_direction, prev_sqnorm)) => {
                    let beta = delta_sqnorm / prev_sqnorm;
                    trace!("iteration {}: beta = {:e}", state.iterations, beta);
                    V::combine_linear(1.0, &delta, beta, &prev_direction)
                },
            };

            let alpha = objective.line_search(state.position, &direction).objective_err()?;
            let next = V::combine_linear(1.0, state.position, alpha, &direction);
            last = Some((direction, delta_sqnorm));
            Ok(next)
        })
    }
}
