use sluice_core::Snapshot;

use crate::equation::Evaluation;

/// How the step search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual fell within tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A positive-to-negative residual crossing between consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignChange {
    /// The two samples enclosing the crossing, in search order.
    pub bracket: [f64; 2],

    /// Iteration index of the second sample.
    pub iter: usize,
}

/// The result of a step search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The last sampled `x`.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Iteration index of the last sample.
    pub iters: usize,

    /// The most recent sign change seen during the search, if any.
    pub sign_change: Option<SignChange>,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(
        eval: Evaluation<I, O>,
        status: Status,
        iters: usize,
        sign_change: Option<SignChange>,
    ) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters,
            sign_change,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
