//! Core traits and types for Sluice.
//!
//! This crate defines the abstractions the solvers and hydraulic designs
//! build on:
//!
//! - [`Model`] maps a typed input to a typed output
//! - [`Snapshot`] captures an input/output pair from a model call
//! - [`Observer`] receives solver events and optionally returns control actions
//! - [`EquationProblem`] adapts solver variables to model inputs and extracts
//!   residuals from model outputs

mod model;
mod observer;
mod problem;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::EquationProblem;
