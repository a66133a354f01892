//! Iterative solvers for Sluice.
//!
//! Solvers here are generic over a [`Model`] and an [`EquationProblem`] and
//! know nothing about hydraulics; the channel and riprap designs in
//! `sluice-hydraulics` are built on top of them.
//!
//! [`Model`]: sluice_core::Model
//! [`EquationProblem`]: sluice_core::EquationProblem

pub mod equation;
