use sluice_core::Snapshot;

use crate::equation::Evaluation;

/// Indicates whether bisection converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIters,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(eval: Evaluation<I, O>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters,
        }
    }
}
