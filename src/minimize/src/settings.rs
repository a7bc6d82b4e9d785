/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use linmin_linalg::Vector;

use crate::driver::{Output, Solver};
use crate::errors::Failure;
use crate::reporting::Observer;
use crate::{AcceleratedGradientDescent, ConjugateGradient, GradientDescent};
use crate::{QuadraticObjective, TerminationCriteria};

/// Any of the solvers, as chosen by a config file.
///
/// ```yaml
/// gradient-descent:
///   step:
///     backtracking:
///       step-size: 1.0
/// ```
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum SolverSettings {
    GradientDescent(GradientDescent),
    AcceleratedGradientDescent(AcceleratedGradientDescent),
    ConjugateGradient(ConjugateGradient),
}

impl<V, O> Solver<V, O> for SolverSettings
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
        match self {
            SolverSettings::GradientDescent(s) => s.solve(objective, initial, criteria, observer, verbose),
            SolverSettings::AcceleratedGradientDescent(s) => s.solve(objective, initial, criteria, observer, verbose),
            SolverSettings::ConjugateGradient(s) => s.solve(objective, initial, criteria, observer, verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Backtracking, Step};
    use crate::Regression;
    use linmin_linalg::DenseMatrix;

    #[test]
    fn serialized_repr() {
        let settings: SolverSettings = from_json!({
            "gradient-descent": { "step": { "backtracking": { "step-size": 1.0 } } },
        });
        assert_eq!(
            settings,
            SolverSettings::GradientDescent(GradientDescent {
                step: Step::Backtracking(Backtracking::new(1.0)),
            }),
        );

        let settings: SolverSettings = from_json!({
            "accelerated-gradient-descent": { "step": "exact-line-search" },
        });
        assert_eq!(
            settings,
            SolverSettings::AcceleratedGradientDescent(AcceleratedGradientDescent::new(true, 0.0, false)),
        );

        let settings: SolverSettings = from_json!({ "conjugate-gradient": {} });
        assert_eq!(settings, SolverSettings::ConjugateGradient(ConjugateGradient::new()));
    }

    #[test]
    fn dispatch() {
        let a = DenseMatrix::eye(2);
        let objective = Regression::new(&a, vec![3.0, 4.0]).unwrap();
        let all = vec![
            SolverSettings::GradientDescent(GradientDescent::new(true, 0.0, false)),
            SolverSettings::AcceleratedGradientDescent(AcceleratedGradientDescent::new(true, 0.0, false)),
            SolverSettings::ConjugateGradient(ConjugateGradient::new()),
        ];
        for settings in all {
            let out = settings.solve(&objective, &vec![0.0, 0.0], &Default::default(), None, false).unwrap();
            assert_eq!(out.iterations, 1, "{:?}", settings);
            assert_close!(abs=1e-12, out.position, vec![3.0, 4.0]);
        }
    }
}
