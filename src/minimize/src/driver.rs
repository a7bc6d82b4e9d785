/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The loop shared by every solver.

use linmin_linalg::Vector;

use crate::errors::{Failure, ResultExt, SolverError};
use crate::reporting::{LogObserver, Observer};
use crate::{IterationSummary, Objective, TerminationCriteria};

/// Minimizes an objective from an initial point.
pub trait Solver<V: Vector, O: Objective<V> + ?Sized> {
    /// The caller's `initial` point is never modified.
    ///
    /// `observer` sees the summary of every iteration, including the last.
    /// With `verbose`, each summary is also logged at `info` level.
    fn solve(
        &self,
        objective: &O,
        initial: &V,
        criteria: &TerminationCriteria,
        observer: Option<&mut dyn Observer>,
        verbose: bool,
    ) -> Result<Output<V>, Failure<O::Error>>;
}

/// The converged point, with its value and gradient.
#[derive(Serialize)]
#[derive(Debug, Clone)]
pub struct Output<V> {
    /// Index of the final iteration.
    pub iterations: u64,
    pub position: V,
    pub gradient: V,
    pub value: f64,
    // ensures addition of new fields is backwards compatible
    #[serde(skip)]
    #[allow(non_snake_case)]
    __no_full_destructure: (),
}

/// The state handed to a solver's update at the end of an iteration
/// that did not converge.
pub(crate) struct Iterate<'a, V> {
    pub iterations: u64,
    pub position: &'a V,
    pub value: f64,
    pub gradient: &'a V,
}

/// Runs iterations until `criteria` are met, calling `advance` to produce each next point.
pub(crate) fn drive<V, O, F>(
    name: &str,
    objective: &O,
    initial: &V,
    criteria: &TerminationCriteria,
    mut observer: Option<&mut dyn Observer>,
    verbose: bool,
    mut advance: F,
) -> Result<Output<V>, Failure<O::Error>>
where
    V: Vector,
    O: Objective<V> + ?Sized,
    F: FnMut(Iterate<'_, V>) -> Result<V, Failure<O::Error>>,
{
    let expected = objective.vector_space();
    let found = initial.space();
    if expected != found {
        return Err(SolverError::SpaceMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }.into());
    }
    criteria.validate()?;

    let mut position = initial.clone();
    let mut previous: Option<(V, f64)> = None;
    let mut gradient_init: Option<V> = None;

    let mut iterations = 0;
    loop {
        let (value, gradient) = objective.diff(&position).objective_err()?;
        let gradient_init = &*gradient_init.get_or_insert_with(|| gradient.clone());

        let (position_prev, value_prev) = match &previous {
            Some((x, f)) => (Some(x), *f),
            None => (None, std::f64::INFINITY),
        };
        let summary = IterationSummary::summarize(
            iterations, value_prev, value,
            gradient_init, &gradient,
            position_prev, &position,
        );

        if let Some(observer) = &mut observer {
            observer.observe(&summary);
        }
        if verbose {
            LogObserver.observe(&summary);
        }

        if criteria.evaluate(&summary) {
            info!("{} finished.", name);
            info!("Iterations: {}", iterations);
            info!("     Value: {}", value);
            info!("  Grad Max: {:e}", summary.gradient_norm);
            return Ok(Output {
                iterations, position, gradient, value,
                __no_full_destructure: (),
            });
        }

        let next = advance(Iterate {
            iterations,
            position: &position,
            value,
            gradient: &gradient,
        })?;
        previous = Some((std::mem::replace(&mut position, next), value));
        iterations += 1;
    }
}
