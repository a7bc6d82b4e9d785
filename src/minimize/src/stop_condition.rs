/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Per-iteration diagnostics, and the criteria that decide convergence from them.

#![allow(non_snake_case)]

use std::fmt;

use linmin_linalg::Vector;

use crate::SolverError;

pub mod prelude {
    pub use super::ShouldStop;
}

/// Generic trait for stop conditions.
pub trait ShouldStop<T> {
    fn should_stop(&self, x: &T) -> bool;
}

/// Diagnostics for a single iteration.
///
/// Norms of the gradient are max-norms; norms of positions and steps are Euclidean.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSummary {
    pub iterations: u64,
    pub cost: f64,
    /// `previous cost - cost` (positive when descending), or `+inf` on the first iteration.
    pub cost_change: f64,
    pub gradient_norm: f64,
    /// Gradient norm at the first iteration, which all later gradients are compared against.
    pub gradient_norm_init: f64,
    pub parameter_norm: f64,
    /// Distance from the previous position, or `+inf` on the first iteration.
    pub step_norm: f64,
}

impl IterationSummary {
    pub fn summarize<V: Vector>(
        iterations: u64,
        cost_prev: f64,
        cost: f64,
        gradient_init: &V,
        gradient: &V,
        position_prev: Option<&V>,
        position: &V,
    ) -> IterationSummary {
        let cost_change = match iterations {
            0 => std::f64::INFINITY,
            _ => cost_prev - cost,
        };
        let step_norm = match position_prev {
            None => std::f64::INFINITY,
            Some(prev) => position.distance(prev),
        };

        IterationSummary {
            iterations, cost, cost_change, step_norm,
            gradient_norm: gradient.inf_norm(),
            gradient_norm_init: gradient_init.inf_norm(),
            parameter_norm: position.norm(),
        }
    }

    pub fn relative_cost_change(&self) -> f64 { self.cost_change.abs() / self.cost }
    pub fn relative_gradient_norm(&self) -> f64 { self.gradient_norm / self.gradient_norm_init }
    pub fn relative_step_norm(&self) -> f64 { self.step_norm / self.parameter_norm }
}

impl fmt::Display for IterationSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "{:5}  f:{:13.6e}  df:{:10.3e}  g:{:10.3e}  dx:{:10.3e}",
            self.iterations,
            self.cost,
            self.relative_cost_change(),
            self.relative_gradient_norm(),
            self.relative_step_norm(),
        )
    }
}

/// Thresholds on relative progress.
///
/// A solve stops at the first iteration where ANY of these hold:
///
/// * `iterations >= max_iterations`
/// * `|cost_change| / (cost + function_epsilon) <= function_tolerance`
/// * `gradient_norm / (gradient_norm_init + gradient_epsilon) <= gradient_tolerance`
/// * `step_norm / (parameter_norm + parameter_epsilon) <= parameter_tolerance`
///
/// The relative cost change assumes the cost is non-negative, as it is for
/// least squares.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct TerminationCriteria {
    #[serde(default = "criteria__max_iterations")] pub max_iterations: u64,
    #[serde(default = "criteria__function_tolerance")] pub function_tolerance: f64,
    #[serde(default = "criteria__function_epsilon")] pub function_epsilon: f64,
    #[serde(default = "criteria__gradient_tolerance")] pub gradient_tolerance: f64,
    #[serde(default = "criteria__gradient_epsilon")] pub gradient_epsilon: f64,
    #[serde(default = "criteria__parameter_tolerance")] pub parameter_tolerance: f64,
    #[serde(default = "criteria__parameter_epsilon")] pub parameter_epsilon: f64,
}

fn criteria__max_iterations() -> u64 { 50 }
fn criteria__function_tolerance() -> f64 { 1e-6 }
fn criteria__function_epsilon() -> f64 { 0.0 }
fn criteria__gradient_tolerance() -> f64 { 1e-10 }
fn criteria__gradient_epsilon() -> f64 { 0.0 }
fn criteria__parameter_tolerance() -> f64 { 1e-8 }
fn criteria__parameter_epsilon() -> f64 { 1e-8 }

impl Default for TerminationCriteria {
    fn default() -> Self {
        TerminationCriteria {
            max_iterations: criteria__max_iterations(),
            function_tolerance: criteria__function_tolerance(),
            function_epsilon: criteria__function_epsilon(),
            gradient_tolerance: criteria__gradient_tolerance(),
            gradient_epsilon: criteria__gradient_epsilon(),
            parameter_tolerance: criteria__parameter_tolerance(),
            parameter_epsilon: criteria__parameter_epsilon(),
        }
    }
}

impl TerminationCriteria {
    /// Stop after exactly this many iterations, ignoring all tolerances.
    pub fn iterations(max_iterations: u64) -> Self {
        TerminationCriteria {
            max_iterations,
            function_tolerance: -1.0,
            gradient_tolerance: -1.0,
            parameter_tolerance: -1.0,
            ..Default::default()
        }
    }

    /// Rejects NaN thresholds and negative epsilons.
    ///
    /// (negative tolerances are allowed; they simply disable their test)
    pub fn validate(&self) -> Result<(), SolverError> {
        let tolerances = [
            ("function-tolerance", self.function_tolerance),
            ("gradient-tolerance", self.gradient_tolerance),
            ("parameter-tolerance", self.parameter_tolerance),
        ];
        for &(name, value) in &tolerances {
            if value.is_nan() {
                return Err(SolverError::InvalidSettings(format!("{} is NaN", name)));
            }
        }

        let epsilons = [
            ("function-epsilon", self.function_epsilon),
            ("gradient-epsilon", self.gradient_epsilon),
            ("parameter-epsilon", self.parameter_epsilon),
        ];
        for &(name, value) in &epsilons {
            if !(value >= 0.0) {
                let msg = format!("{} must be non-negative, got {}", name, value);
                return Err(SolverError::InvalidSettings(msg));
            }
        }
        Ok(())
    }

    /// Returns `true` once the summarized iteration counts as converged.
    pub fn evaluate(&self, summary: &IterationSummary) -> bool {
        let IterationSummary {
            iterations, cost, cost_change, gradient_norm,
            gradient_norm_init, parameter_norm, step_norm,
        } = *summary;

        iterations >= self.max_iterations
            || cost_change.abs() / (cost + self.function_epsilon) <= self.function_tolerance
            || gradient_norm.abs() / (gradient_norm_init + self.gradient_epsilon) <= self.gradient_tolerance
            || step_norm / (parameter_norm + self.parameter_epsilon) <= self.parameter_tolerance
    }
}

impl ShouldStop<IterationSummary> for TerminationCriteria {
    fn should_stop(&self, summary: &IterationSummary) -> bool { self.evaluate(summary) }
}
