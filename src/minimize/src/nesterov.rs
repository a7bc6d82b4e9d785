/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Nesterov's accelerated gradient descent.

use linmin_linalg::Vector;

use crate::driver::{drive, Output, Solver};
use crate::errors::{Failure, ResultExt};
use crate::reporting::Observer;
use crate::step::{Step, StepRule};
use crate::{Objective, TerminationCriteria};

/// Gradient steps are taken from a lookahead point `y`, which extrapolates
/// along the last step with a weight that grows over time.
///
/// Convergence is still judged at the iterates `x` themselves, so each iteration
/// evaluates the objective both at `x` and at `y`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AcceleratedGradientDescent<S = Step> {
    pub step: S,
}

impl AcceleratedGradientDescent {
    /// See [`Step::from_flags`].
    pub fn new(line_search: bool, step_size: f64, backtrack: bool) -> Self {
        AcceleratedGradientDescent { step: Step::from_flags(line_search, step_size, backtrack) }
    }
}

impl<S> AcceleratedGradientDescent<S> {
    pub fn with_step_rule(step: S) -> Self { AcceleratedGradientDescent { step } }
}

/// `t_{k+1} = (1 + sqrt(4 t_k^2 + 1)) / 2`
fn next_momentum(t: f64) -> f64 { (1.0 + (4.0 * t * t + 1.0).sqrt()) / 2.0 }

impl<V, O, S> Solver<V, O> for AcceleratedGradientDescent<S>
where
    V: Vector,
    O: Objective<V> + ?Sized,
    S: StepRule<V, O>,
{
    fn solve(
        &self,
        objective: &O,
        initial: &V,
        criteria: &TerminationCriteria,
        observer: Option<&mut dyn Observer>,
        verbose: bool,
    ) -> Result<Output<V>, Failure<O::Error>> {
        self.step.validate()?;

        let mut step = self.step.clone();
        let mut momentum = 1.0;
        let mut lookahead: Option<V> = None;
        drive("Accelerated gradient descent", objective, initial, criteria, observer, verbose, |state| {
            // the first lookahead is the initial point itself
            let y = lookahead.take().unwrap_or_else(|| state.position.clone());
            let (value_y, gradient_y) = objective.diff(&y).objective_err()?;
            let next = step.step(objective, &y, value_y, &gradient_y)?;

            // y = x_next + w (x_next - x)
            let momentum_next = next_momentum(momentum);
            let weight = (momentum - 1.0) / momentum_next;
            trace!("momentum: {}, weight: {}", momentum_next, weight);
            lookahead = Some(V::combine_linear(1.0 + weight, &next, -weight, state.position));
            momentum = momentum_next;

            Ok(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Backtracking;
    use crate::test_functions::{random_problem, random_vec, BrokenOperator, Counting, Quartic};
    use crate::{GradientDescent, IterationSummary, LsqError, Regression};
    use linmin_linalg::{DenseMatrix, LinearOperator};

    #[test]
    fn momentum_sequence() {
        assert_eq!(next_momentum(1.0), (1.0 + 5f64.sqrt()) / 2.0);
        let mut t = 1.0;
        for _ in 0..10 {
            let t_next = next_momentum(t);
            assert!(t_next > t);
            t = t_next;
        }
    }

    #[test]
    fn two_evaluations_per_iteration() {
        let (a, b) = random_problem(3);
        let objective = Counting::new(Regression::new(&a, b).unwrap());
        let criteria = TerminationCriteria::iterations(1);

        let out = AcceleratedGradientDescent::new(false, 0.01, false)
            .solve(&objective, &random_vec(3), &criteria, None, false)
            .unwrap();

        // at x_0, at y_0 (== x_0), and at x_1
        assert_eq!(out.iterations, 1);
        assert_eq!(objective.diffs.get(), 3);
        assert_eq!(objective.values.get(), 0);
    }

    #[test]
    fn first_step_matches_gradient_descent() {
        // with y_0 = x_0 and t_0 = 1, the first iterate is a plain gradient step
        let (a, b) = random_problem(4);
        let objective = Regression::new(&a, b).unwrap();
        let initial = random_vec(4);
        let criteria = TerminationCriteria::iterations(1);

        let accelerated = AcceleratedGradientDescent::new(true, 0.0, false)
            .solve(&objective, &initial, &criteria, None, false)
            .unwrap();
        let plain = GradientDescent::new(true, 0.0, false)
            .solve(&objective, &initial, &criteria, None, false)
            .unwrap();
        assert_eq!(accelerated.position, plain.position);
    }

    #[test]
    fn converges_on_regression() {
        let _ = env_logger::try_init();

        let (a, b) = random_problem(5);
        let expected = b.clone();
        let b = a.apply(&expected, false).unwrap();
        let objective = Regression::new(&a, b).unwrap();
        // the cost is not monotonic under momentum, and can briefly stall before convergence
        let criteria = TerminationCriteria {
            max_iterations: 500,
            function_tolerance: 0.0,
            ..Default::default()
        };

        let solver = AcceleratedGradientDescent::new(false, 1.0, true);
        let out = solver.solve(&objective, &vec![0.0; 5], &criteria, None, true).unwrap();
        assert!(out.iterations < 500);
        assert_close!(rel=1e-5, abs=1e-6, out.position, expected);
    }

    #[test]
    fn backtracking_on_nonquadratic() {
        let objective = Quartic { center: vec![-1.0, 2.0] };
        let solver = AcceleratedGradientDescent::with_step_rule(Backtracking::new(1.0));
        let criteria = TerminationCriteria {
            max_iterations: 5000,
            function_tolerance: 0.0,
            ..Default::default()
        };

        let mut count = 0u64;
        let mut observer = |_: &IterationSummary| count += 1;
        let out = solver.solve(&objective, &vec![0.0, 0.0], &criteria, Some(&mut observer), false).unwrap();

        assert_close!(abs=1e-4, out.position, vec![-1.0, 2.0]);
        assert_eq!(count, out.iterations + 1);
    }

    #[test]
    fn failure_propagation() {
        let objective = Regression::new(BrokenOperator(3), vec![0.0; 3]).unwrap();
        let result = AcceleratedGradientDescent::new(false, 0.1, true)
            .solve(&objective, &vec![1.0; 3], &Default::default(), None, false);
        match result {
            Err(Failure::Objective(LsqError::Shape(_))) => {},
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn dense_identity() {
        let a = DenseMatrix::eye(2);
        let objective = Regression::new(&a, vec![3.0, 4.0]).unwrap();
        let out = AcceleratedGradientDescent::new(true, 0.0, false)
            .solve(&objective, &vec![0.0, 0.0], &Default::default(), None, false)
            .unwrap();
        assert_eq!(out.iterations, 1);
        assert_close!(abs=1e-12, out.position, vec![3.0, 4.0]);
    }
}
