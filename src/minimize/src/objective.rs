/* ************************************************************************ **
** This file is part of linmin, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Objective functions, and the least-squares family.

use linmin_linalg::{LinearOperator, ShapeError, Vector};

/// A differentiable cost function over a vector space.
pub trait Objective<V: Vector> {
    type Error;

    /// The space of valid points.
    fn vector_space(&self) -> V::Space;

    fn value(&self, x: &V) -> Result<f64, Self::Error>;

    /// Value and gradient.
    fn diff(&self, x: &V) -> Result<(f64, V), Self::Error>;

    /// Computes the value, and the gradient only if requested.
    fn evaluate(&self, x: &V, with_gradient: bool) -> Result<(f64, Option<V>), Self::Error> {
        match with_gradient {
            true => self.diff(x).map(|(value, gradient)| (value, Some(gradient))),
            false => self.value(x).map(|value| (value, None)),
        }
    }
}

/// An objective that is quadratic in its argument, and can therefore
/// minimize itself exactly along a line.
///
/// Solvers and step rules that rely on an exact line search require this
/// bound, so that e.g. a quartic objective can't be handed to CG.
pub trait QuadraticObjective<V: Vector>: Objective<V> {
    /// Returns the `alpha` that minimizes `f(position + alpha * direction)`.
    fn line_search(&self, position: &V, direction: &V) -> Result<f64, Self::Error>;
}

impl<'a, V: Vector, O: Objective<V> + ?Sized> Objective<V> for &'a O {
    type Error = O::Error;

    fn vector_space(&self) -> V::Space { (**self).vector_space() }
    fn value(&self, x: &V) -> Result<f64, O::Error> { (**self).value(x) }
    fn diff(&self, x: &V) -> Result<(f64, V), O::Error> { (**self).diff(x) }
}

impl<'a, V: Vector, O: QuadraticObjective<V> + ?Sized> QuadraticObjective<V> for &'a O {
    fn line_search(&self, position: &V, direction: &V) -> Result<f64, O::Error>
    { (**self).line_search(position, direction) }
}

//==================================================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LsqError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("target vector lives in {found}, but the operator maps into {expected}")]
    BadTarget { expected: String, found: String },

    #[error("exact line search is undefined along this direction (denominator: {denominator:e})")]
    DegenerateLineSearch { denominator: f64 },

    #[error("regularization weight must be finite and non-negative, got {0}")]
    BadRegularization(f64),
}

fn check_target<V: Vector, A: LinearOperator<V>>(operator: &A, target: &V) -> Result<(), LsqError> {
    let expected = operator.codomain();
    let found = target.space();
    if expected != found {
        return Err(LsqError::BadTarget {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// `-numerator / denominator`, for the minimizer of a 1D parabola.
fn exact_step(numerator: f64, denominator: f64) -> Result<f64, LsqError> {
    if !(denominator > 0.0 && denominator.is_finite()) {
        return Err(LsqError::DegenerateLineSearch { denominator });
    }
    let alpha = -numerator / denominator;
    trace!("exact line search: alpha = {:e}", alpha);
    Ok(alpha)
}

/// `0.5 |A x - b|^2`
#[derive(Debug, Clone)]
pub struct Regression<A, V> {
    operator: A,
    target: V,
}

impl<A, V> Regression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    /// Fails if `target` is not in the codomain of `operator`.
    pub fn new(operator: A, target: V) -> Result<Self, LsqError> {
        check_target(&operator, &target)?;
        Ok(Regression { operator, target })
    }

    pub fn operator(&self) -> &A { &self.operator }
    pub fn target(&self) -> &V { &self.target }

    /// `A x - b`
    pub fn residual(&self, x: &V) -> Result<V, ShapeError>
    { Ok(self.operator.apply(x, false)?.subtract(&self.target)) }
}

impl<A, V> Objective<V> for Regression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    type Error = LsqError;

    fn vector_space(&self) -> V::Space { self.operator.domain() }

    fn value(&self, x: &V) -> Result<f64, LsqError> {
        let r = self.residual(x)?;
        Ok(0.5 * r.sqnorm())
    }

    fn diff(&self, x: &V) -> Result<(f64, V), LsqError> {
        let r = self.residual(x)?;
        let gradient = self.operator.apply(&r, true)?;
        Ok((0.5 * r.sqnorm(), gradient))
    }
}

impl<A, V> QuadraticObjective<V> for Regression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    // minimizes |r + alpha q|^2 where q = A v
    fn line_search(&self, x: &V, v: &V) -> Result<f64, LsqError> {
        let r = self.residual(x)?;
        let q = self.operator.apply(v, false)?;
        exact_step(r.dot(&q), q.sqnorm())
    }
}

/// `0.5 |A x - b|^2 + 0.5 lambda |x|^2`
#[derive(Debug, Clone)]
pub struct RidgeRegression<A, V> {
    inner: Regression<A, V>,
    lambda: f64,
}

impl<A, V> RidgeRegression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    /// Fails if `target` is not in the codomain of `operator`, or if `lambda`
    /// is negative or not finite.
    pub fn new(operator: A, target: V, lambda: f64) -> Result<Self, LsqError> {
        if !(lambda.is_finite() && lambda >= 0.0) {
            return Err(LsqError::BadRegularization(lambda));
        }
        let inner = Regression::new(operator, target)?;
        Ok(RidgeRegression { inner, lambda })
    }

    pub fn operator(&self) -> &A { self.inner.operator() }
    pub fn target(&self) -> &V { self.inner.target() }
    pub fn lambda(&self) -> f64 { self.lambda }

    /// `A x - b`
    pub fn residual(&self, x: &V) -> Result<V, ShapeError> { self.inner.residual(x) }
}

impl<A, V> Objective<V> for RidgeRegression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    type Error = LsqError;

    fn vector_space(&self) -> V::Space { self.inner.vector_space() }

    fn value(&self, x: &V) -> Result<f64, LsqError> {
        let data = self.inner.value(x)?;
        Ok(data + 0.5 * self.lambda * x.sqnorm())
    }

    fn diff(&self, x: &V) -> Result<(f64, V), LsqError> {
        let (data, data_gradient) = self.inner.diff(x)?;
        let value = data + 0.5 * self.lambda * x.sqnorm();
        let gradient = V::combine_linear(1.0, &data_gradient, self.lambda, x);
        Ok((value, gradient))
    }
}

impl<A, V> QuadraticObjective<V> for RidgeRegression<A, V>
where
    V: Vector,
    A: LinearOperator<V>,
{
    // minimizes |r + alpha q|^2 + lambda |x + alpha v|^2
    fn line_search(&self, x: &V, v: &V) -> Result<f64, LsqError> {
        let r = self.residual(x)?;
        let q = self.operator().apply(v, false)?;
        let numerator = r.dot(&q) + self.lambda * x.dot(v);
        let denominator = q.sqnorm() + self.lambda * v.sqnorm();
        exact_step(numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::{random_problem, random_vec};
    use linmin_linalg::DenseMatrix;

    fn numerical_gradient<O: Objective<Vec<f64>>>(objective: &O, x: &[f64]) -> Vec<f64>
    where O::Error: std::fmt::Debug,
    {
        let h = 1e-5;
        (0..x.len()).map(|i| {
            let mut plus = x.to_vec();
            let mut minus = x.to_vec();
            plus[i] += h;
            minus[i] -= h;
            (objective.value(&plus).unwrap() - objective.value(&minus).unwrap()) / (2.0 * h)
        }).collect()
    }

    #[test]
    fn regression_by_hand() {
        let a = DenseMatrix::from_rows(2, vec![[1.0, 2.0], [0.0, 1.0], [1.0, 0.0]]);
        let objective = Regression::new(&a, vec![1.0, 1.0, 1.0]).unwrap();

        // r = [2, 0, 0]
        let x = vec![1.0, 1.0];
        assert_eq!(objective.residual(&x).unwrap(), vec![2.0, 0.0, 0.0]);
        assert_eq!(objective.value(&x).unwrap(), 2.0);
        assert_eq!(objective.diff(&x).unwrap(), (2.0, vec![2.0, 4.0]));
        assert_eq!(objective.evaluate(&x, false).unwrap(), (2.0, None));
        assert_eq!(objective.evaluate(&x, true).unwrap(), (2.0, Some(vec![2.0, 4.0])));
    }

    #[test]
    fn gradients_match_finite_differences() {
        let _ = env_logger::try_init();

        for _ in 0..5 {
            let (a, b) = random_problem(4);
            let x = random_vec(4);

            let plain = Regression::new(&a, b.clone()).unwrap();
            let (_, gradient) = plain.diff(&x).unwrap();
            assert_close!(rel=1e-6, abs=1e-6, gradient, numerical_gradient(&plain, &x));

            let ridge = RidgeRegression::new(&a, b.clone(), 0.75).unwrap();
            let (_, gradient) = ridge.diff(&x).unwrap();
            assert_close!(rel=1e-6, abs=1e-6, gradient, numerical_gradient(&ridge, &x));
        }
    }

    #[test]
    fn ridge_without_weight_is_plain() {
        let (a, b) = random_problem(3);
        let plain = Regression::new(&a, b.clone()).unwrap();
        let ridge = RidgeRegression::new(&a, b.clone(), 0.0).unwrap();

        let x = random_vec(3);
        let v = random_vec(3);
        let (plain_value, plain_gradient) = plain.diff(&x).unwrap();
        let (ridge_value, ridge_gradient) = ridge.diff(&x).unwrap();
        assert_close!(plain_value, ridge_value);
        assert_close!(plain_gradient, ridge_gradient);
        assert_close!(plain.line_search(&x, &v).unwrap(), ridge.line_search(&x, &v).unwrap());
    }

    #[test]
    fn line_search_minimizes_along_line() {
        let (a, b) = random_problem(5);
        let ridge = RidgeRegression::new(&a, b, 0.3).unwrap();
        let x = random_vec(5);
        let v = random_vec(5);

        let alpha = ridge.line_search(&x, &v).unwrap();
        let at = |t: f64| ridge.value(&Vector::combine_linear(1.0, &x, t, &v)).unwrap();

        // the directional derivative vanishes at the minimum
        let slope = ridge.diff(&Vector::combine_linear(1.0, &x, alpha, &v)).unwrap().1.dot(&v);
        assert_close!(abs=1e-8, slope, 0.0);
        assert!(at(alpha) <= at(alpha + 1e-3));
        assert!(at(alpha) <= at(alpha - 1e-3));
    }

    #[test]
    fn degenerate_line_search() {
        let (a, b) = random_problem(2);
        let objective = Regression::new(&a, b).unwrap();
        match objective.line_search(&vec![1.0, 1.0], &vec![0.0, 0.0]) {
            Err(LsqError::DegenerateLineSearch { denominator }) => assert_eq!(denominator, 0.0),
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn construction_errors() {
        let a = DenseMatrix::eye(2);
        match RidgeRegression::new(&a, vec![1.0, 2.0], -1.0) {
            Err(LsqError::BadRegularization(lambda)) => assert_eq!(lambda, -1.0),
            r => panic!("unexpected: {:?}", r),
        }
        assert!(RidgeRegression::new(&a, vec![1.0, 2.0], std::f64::NAN).is_err());
        match Regression::new(&a, vec![1.0, 2.0, 3.0]) {
            Err(LsqError::BadTarget { expected, found }) => {
                assert_eq!(expected, "R^2");
                assert_eq!(found, "R^3");
            },
            r => panic!("unexpected: {:?}", r),
        }
    }

    #[test]
    fn wrong_space_is_an_error() {
        let a = DenseMatrix::eye(2);
        let objective = Regression::new(&a, vec![1.0, 2.0]).unwrap();
        match objective.diff(&vec![1.0, 2.0, 3.0]) {
            Err(LsqError::Shape(e)) => assert!(!e.transpose),
            r => panic!("unexpected: {:?}", r),
        }
    }
}
