/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Rules for stepping along the negative gradient.

#![allow(non_snake_case)]

use linmin_linalg::Vector;

use crate::errors::{Failure, ResultExt, SolverError};
use crate::{Objective, QuadraticObjective};

/// Picks the next point from the current point and its gradient.
///
/// Rules may carry state from one step to the next (e.g. the backtracking step size).
/// Solvers clone the configured rule at the beginning of each solve.
pub trait StepRule<V: Vector, O: Objective<V> + ?Sized>: Clone {
    fn step(
        &mut self,
        objective: &O,
        from: &V,
        value: f64,
        gradient: &V,
    ) -> Result<V, Failure<O::Error>>;

    /// Checked before a solve begins.
    fn validate(&self) -> Result<(), SolverError> { Ok(()) }
}

fn validate_step_size(step_size: f64) -> Result<(), SolverError> {
    match step_size > 0.0 && step_size.is_finite() {
        true => Ok(()),
        false => {
            let msg = format!("step size must be positive and finite, got {}", step_size);
            Err(SolverError::InvalidSettings(msg))
        },
    }
}

/// Moves to the exact minimum along the gradient direction.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ExactLineSearch;

impl<V, O> StepRule<V, O> for ExactLineSearch
where
    V: Vector,
    O: QuadraticObjective<V> + ?Sized,
{
    fn step(&mut self, objective: &O, from: &V, _: f64, gradient: &V) -> Result<V, Failure<O::Error>> {
        // The line search accounts for the sign of the direction, so this adds.
        let alpha = objective.line_search(from, gradient).objective_err()?;
        Ok(V::combine_linear(1.0, from, alpha, gradient))
    }
}

/// `x - step_size * g`
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct FixedStep {
    pub step_size: f64,
}

impl<V, O> StepRule<V, O> for FixedStep
where
    V: Vector,
    O: Objective<V> + ?Sized,
{
    fn step(&mut self, _: &O, from: &V, _: f64, gradient: &V) -> Result<V, Failure<O::Error>>
    { Ok(V::combine_linear(1.0, from, -self.step_size, gradient)) }

    fn validate(&self) -> Result<(), SolverError> { validate_step_size(self.step_size) }
}

/// Halves a trial step until `f(x) - f(x - t g) >= t |g|^2 / 2`.
///
/// The accepted `t` becomes the first trial of the next step, so the step size
/// only ever decreases over the course of a solve.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Backtracking {
    /// The first trial step.
    pub step_size: f64,
    /// Give up after halving this many times within a single step.
    #[serde(default = "backtracking__max_halvings")]
    pub max_halvings: u32,
}

fn backtracking__max_halvings() -> u32 { 100 }

impl Backtracking {
    pub fn new(step_size: f64) -> Self {
        Backtracking { step_size, max_halvings: backtracking__max_halvings() }
    }
}

impl<V, O> StepRule<V, O> for Backtracking
where
    V: Vector,
    O: Objective<V> + ?Sized,
{
    fn step(&mut self, objective: &O, from: &V, value: f64, gradient: &V) -> Result<V, Failure<O::Error>> {
        let sqnorm = gradient.sqnorm();
        let mut halvings = 0;
        loop {
            let t = self.step_size;
            let candidate = V::combine_linear(1.0, from, -t, gradient);
            let decrease = value - objective.value(&candidate).objective_err()?;

            // (a NaN value is never accepted)
            if decrease >= 0.5 * t * sqnorm {
                return Ok(candidate);
            }
            debug!("backtracking: rejected step {:e} (decrease: {:e})", t, decrease);

            if halvings >= self.max_halvings {
                return Err(SolverError::BacktrackingExhausted { halvings, step_size: t }.into());
            }
            self.step_size = 0.5 * t;
            halvings += 1;
        }
    }

    fn validate(&self) -> Result<(), SolverError> { validate_step_size(self.step_size) }
}

/// Any of the step rules, selected at runtime.
///
/// Since one of these is the exact line search, this is only usable with
/// a [`QuadraticObjective`].
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    ExactLineSearch,
    Fixed(FixedStep),
    Backtracking(Backtracking),
}

impl Step {
    /// Maps the classic trio of flags onto a step rule.
    ///
    /// An exact line search takes priority; `step_size` is then unused.
    /// Backtracking starts its first trial at `step_size`.
    pub fn from_flags(line_search: bool, step_size: f64, backtrack: bool) -> Self {
        match (line_search, backtrack) {
            (true, _) => Step::ExactLineSearch,
            (false, false) => Step::Fixed(FixedStep { step_size }),
            (false, true) => Step::Backtracking(Backtracking::new(step_size)),
        }
    }
}

impl<V, O> StepRule<V, O> for Step
where
    V: Vector,
    O: QuadraticObjective<V> + ?Sized,
{
    fn step(&mut self, objective: &O, from: &V, value: f64, gradient: &V) -> Result<V, Failure<O::Error>> {
        match self {
            Step::ExactLineSearch => ExactLineSearch.step(objective, from, value, gradient),
            Step::Fixed(rule) => rule.step(objective, from, value, gradient),
            Step::Backtracking(rule) => rule.step(objective, from, value, gradient),
        }
    }

    fn validate(&self) -> Result<(), SolverError> {
        match self {
            Step::ExactLineSearch => Ok(()),
            Step::Fixed(rule) => StepRule::<V, O>::validate(rule),
            Step::Backtracking(rule) => StepRule::<V, O>::validate(rule),
        }
    }
}
