/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Steepest descent.

use linmin_linalg::Vector;

use crate::driver::{drive, Output, Solver};
use crate::errors::Failure;
use crate::reporting::Observer;
use crate::step::{Step, StepRule};
use crate::{Objective, TerminationCriteria};

/// Gradient descent, moving along `-g` by the configured step rule.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GradientDescent<S = Step> {
    pub step: S,
}

impl GradientDescent {
    /// See [`Step::from_flags`].
    pub fn new(line_search: bool, step_size: f64, backtrack: bool) -> Self {
        GradientDescent { step: Step::from_flags(line_search, step_size, backtrack) }
    }
}

impl<S> GradientDescent<S> {
    pub fn with_step_rule(step: S) -> Self { GradientDescent { step } }
}

impl<V, O, S> Solver<V, O> for GradientDescent<S>
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
        drive("Gradient descent", objective, initial, criteria, observer, verbose, |state| {
            step.step(objective, state.position, state.value, state.gradient)
        })
    }
}
