//! Bisection over a bracket that encloses a residual sign change.
//!
//! Each iteration evaluates the midpoint and keeps the half whose endpoints
//! still have residuals of opposite sign. The search stops when the bracket
//! is narrower than [`Config::x_abs_tol`] or the midpoint residual is within
//! [`Config::residual_tol`]. The returned point is the best sample seen.

mod config;
mod solution;

pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};

use sluice_core::{EquationProblem, Model};

use super::{Error, Evaluation, evaluate};

/// Finds a root inside `bracket` by repeated halving.
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is not finite or has zero width, if the
/// endpoint residuals share a sign, or if the model or problem fails.
pub fn solve<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let [mut left, mut right] = ordered(bracket)?;

    let left_eval = finite(evaluate(model, problem, left)?)?;
    if left_eval.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }
    let right_eval = finite(evaluate(model, problem, right)?)?;
    if right_eval.residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let left_positive = left_eval.residual > 0.0;
    if left_positive == (right_eval.residual > 0.0) {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual: left_eval.residual,
            right_residual: right_eval.residual,
        });
    }

    let mut best = if left_eval.residual.abs() <= right_eval.residual.abs() {
        left_eval
    } else {
        right_eval
    };

    for iter in 1..=config.max_iters() {
        let mid = 0.5 * (left + right);
        let mid_eval = finite(evaluate(model, problem, mid)?)?;
        let mid_positive = mid_eval.residual > 0.0;

        let done = mid_eval.residual.abs() <= config.residual_tol()
            || (right - left) <= config.x_abs_tol();

        if mid_positive == left_positive {
            left = mid;
        } else {
            right = mid;
        }

        if mid_eval.residual.abs() <= best.residual.abs() {
            best = mid_eval;
        }

        if done {
            return Ok(Solution::from_eval(best, Status::Converged, iter));
        }
    }

    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters()))
}

fn ordered(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    let [a, b] = bracket;

    #[allow(clippy::float_cmp)]
    if !a.is_finite() || !b.is_finite() || a == b {
        return Err(Error::InvalidBracket { left: a, right: b });
    }

    Ok(if a < b { [a, b] } else { [b, a] })
}

fn finite<I, O>(eval: Evaluation<I, O>) -> Result<Evaluation<I, O>, Error> {
    if eval.residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        })
    }
}
