use thiserror::Error;

use sluice_core::{EquationProblem, Model, Snapshot};

/// A scalar equation problem evaluated at a single `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O> {
    /// Returns the model input at `x`.
    pub fn input(&self) -> &I {
        &self.snapshot.input
    }

    /// Returns the model output at `x`.
    pub fn output(&self) -> &O {
        &self.snapshot.output
    }
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Maps `x` to a model input, calls the model, and computes the residual.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
