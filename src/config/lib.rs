/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings documents for the solvers in `linmin-minimize`.
//!
//! ```yaml
//! solver:
//!   gradient-descent:
//!     step: exact-line-search
//! termination:
//!   max-iterations: 200
//!   gradient-tolerance: 1e-8
//! verbose: true
//! ```

#[macro_use] extern crate serde_derive;

pub use self::monomorphize::YamlRead;
#[macro_use]
mod monomorphize;

#[doc(hidden)] // used by macro
pub mod reexports {
    pub use log;
    pub use serde_ignored;
    pub use serde_yaml;
}

use linmin_linalg::Vector;
use linmin_minimize::{Failure, Observer, Output, QuadraticObjective, Solver};
use linmin_minimize::{SolverSettings, TerminationCriteria};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A complete description of how to run a solver.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub solver: SolverSettings,
    #[serde(default)]
    pub termination: TerminationCriteria,
    /// Log a line for every iteration.
    #[serde(default)]
    pub verbose: bool,
}
derive_yaml_read!{Settings}

impl Settings {
    /// Runs the configured solver with the configured criteria.
    pub fn solve<V, O>(
        &self,
        objective: &O,
        initial: &V,
        observer: Option<&mut dyn Observer>,
    ) -> Result<Output<V>, Failure<O::Error>>
    where
        V: Vector,
        O: QuadraticObjective<V> + ?Sized,
    {
        self.solver.solve(objective, initial, &self.termination, observer, self.verbose)
    }
}
