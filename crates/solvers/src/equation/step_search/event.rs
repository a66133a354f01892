use crate::equation::Evaluation;

use super::SignChange;

/// Control actions supported by the step search solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the current sample.
    StopEarly,
}

/// Event emitted by the step search solver for each sample.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration index (0 for the starting sample).
    pub iter: usize,

    /// Evaluation at the current sample.
    pub eval: &'a Evaluation<I, O>,

    /// Set when the residual went from positive to negative since the
    /// previous sample.
    pub sign_change: Option<SignChange>,

    /// Whether this sample is within tolerance.
    pub converged: bool,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the sampled `x`.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the sample.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
