use std::error::Error as StdError;

use thiserror::Error;

use super::EvalError;

/// Errors that can occur while solving an equation problem.
#[derive(Debug, Error)]
pub enum Error {
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("invalid bracket [{left}, {right}]: endpoints must be finite and distinct")]
    InvalidBracket { left: f64, right: f64 },

    #[error("no root in bracket: f({left})={left_residual}, f({right})={right_residual}")]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
