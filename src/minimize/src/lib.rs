/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! First-order minimizers for smooth objectives.
//!
//! All solvers share one loop: evaluate the objective, summarize the iteration,
//! report it, test for convergence, and step.  They differ only in the step.

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

#[cfg(test)] #[macro_use] extern crate linmin_assert_close;
#[cfg(test)] #[macro_use] extern crate linmin_util_macros;

#[cfg(test)] pub(crate) mod test_functions;

pub use crate::errors::{Failure, SolverError};
mod errors;

pub use crate::objective::{Objective, QuadraticObjective, Regression, RidgeRegression, LsqError};
pub mod objective;

pub use crate::stop_condition::{IterationSummary, TerminationCriteria, ShouldStop};
pub mod stop_condition;

pub use crate::reporting::{Observer, LogObserver};
mod reporting;

pub use crate::step::{StepRule, Step, ExactLineSearch, FixedStep, Backtracking};
pub mod step;

pub use crate::driver::{Solver, Output};
mod driver;

pub use crate::gd::GradientDescent;
mod gd;

pub use crate::nesterov::AcceleratedGradientDescent;
mod nesterov;

pub use crate::cg::ConjugateGradient;
mod cg;

pub use crate::settings::SolverSettings;
mod settings;
