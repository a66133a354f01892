//! Fixed-step marching search for scalar equations.
//!
//! # Algorithm
//!
//! Starting at [`Config::start`], the solver evaluates the residual. If its
//! magnitude is below [`Config::tolerance`] the search has converged;
//! otherwise `x` advances by [`Config::step`] and the residual is evaluated
//! again. The search only moves forward and never refines between samples,
//! so a step that is coarse relative to the tolerance can jump over the root.
//!
//! The first evaluation is iteration 0. When iteration [`Config::max_iters`]
//! is reached without converging the solver returns the last sample with
//! [`Status::MaxIters`]; exhaustion is a degraded result, not an error.
//!
//! # Sign changes
//!
//! A residual going from positive to negative between two consecutive samples
//! means the root lies between them. The solver records the latest crossing in
//! [`Solution::sign_change`] and keeps marching. Callers that need a sharper
//! answer can refine that bracket with [`bisection`](super::bisection).
//!
//! # Observer events
//!
//! One [`Event`] is emitted per evaluation, before the convergence decision.
//! Returning [`Action::StopEarly`] ends the search with
//! [`Status::StoppedByObserver`].

mod config;
mod event;
mod solution;


pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use solution::{SignChange, Solution, Status};

use sluice_core::{EquationProblem, Model, Observer};

use super::{Error, evaluate};

/// Marches `x` forward until the residual is within tolerance.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any sample, or if a
/// residual is not finite.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut x = config.start();
    let mut iter = 0;
    let mut previous: Option<(f64, f64)> = None;
    let mut sign_change = None;

    loop {
        let eval = evaluate(model, problem, x)?;
        let residual = eval.residual;
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let crossing = previous.and_then(|(prev_x, prev_residual)| {
            (prev_residual > 0.0 && residual < 0.0).then_some(SignChange {
                bracket: [prev_x, x],
                iter,
            })
        });
        if let Some(crossing) = crossing {
            log::debug!(
                "residual changed sign between x = {} and x = {} at iteration {iter}",
                crossing.bracket[0],
                crossing.bracket[1],
            );
            sign_change = Some(crossing);
        }

        let converged = residual.abs() < config.tolerance();

        let event = Event {
            iter,
            eval: &eval,
            sign_change: crossing,
            converged,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(
                eval,
                Status::StoppedByObserver,
                iter,
                sign_change,
            ));
        }

        if converged {
            return Ok(Solution::from_eval(
                eval,
                Status::Converged,
                iter,
                sign_change,
            ));
        }

        if iter >= config.max_iters() {
            log::warn!(
                "step search exhausted {iter} iterations without converging; \
                 last x = {x}, residual = {residual}"
            );
            return Ok(Solution::from_eval(
                eval,
                Status::MaxIters,
                iter,
                sign_change,
            ));
        }

        previous = Some((x, residual));
        x += config.step();
        iter += 1;
    }
}

/// Runs the step search without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any sample, or if a
/// residual is not finite.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, config, ())
}
