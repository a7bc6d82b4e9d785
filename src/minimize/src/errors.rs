/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

/// Errors raised by the solvers themselves, as opposed to the objective.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("initial point lives in {found}, but the objective is defined on {expected}")]
    SpaceMismatch { expected: String, found: String },

    #[error("backtracking failed to find sufficient decrease after {halvings} halvings (step size {step_size:e})")]
    BacktrackingExhausted { halvings: u32, step_size: f64 },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// The error type of every solve.
///
/// No partial trajectory is recorded; if you need one, watch the iterations
/// with an [`Observer`](crate::Observer).
#[derive(Debug, Clone, PartialEq)]
pub enum Failure<E> {
    Solver(SolverError),
    /// An error from evaluating the objective or its line search.
    Objective(E),
}

impl<E> From<SolverError> for Failure<E> {
    fn from(e: SolverError) -> Self { Failure::Solver(e) }
}

impl<E> Failure<E> {
    pub fn objective_error(&self) -> Option<&E> {
        match self {
            Failure::Objective(e) => Some(e),
            Failure::Solver(_) => None,
        }
    }

    pub fn solver_error(&self) -> Option<&SolverError> {
        match self {
            Failure::Solver(e) => Some(e),
            Failure::Objective(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::Solver(e) => fmt::Display::fmt(e, f),
            Failure::Objective(e) => write!(f, "objective evaluation failed: {}", e),
        }
    }
}

impl<E> std::error::Error for Failure<E>
where E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Failure::Solver(e) => Some(e),
            Failure::Objective(e) => Some(e),
        }
    }
}

/// Lifts objective errors so that `?` works inside solvers.
pub(crate) trait ResultExt<T, E> {
    fn objective_err(self) -> Result<T, Failure<E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn objective_err(self) -> Result<T, Failure<E>> { self.map_err(Failure::Objective) }
}
