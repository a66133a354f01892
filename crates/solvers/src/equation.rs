//! Solvers for scalar equation problems.
//!
//! An [`EquationProblem`] maps a solver variable `x` to a model input, calls
//! the model, and computes a residual. Solvers in this module search for the
//! `x` whose residual is within tolerance of zero.
//!
//! # Solvers
//!
//! - [`step_search`]: marches `x` forward by a fixed increment until the
//!   residual is within tolerance or the iteration budget runs out
//! - [`bisection`]: refines a bracket known to contain a sign change
//!
//! [`EquationProblem`]: sluice_core::EquationProblem

mod error;
mod evaluate;

pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod bisection;
pub mod step_search;
