use std::error::Error as StdError;

use sluice_solvers::equation;
use thiserror::Error;

use crate::section::ShapeError;

/// A hydraulic formula was evaluated outside its domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("depth must be non-negative, got {depth}")]
    NegativeDepth { depth: f64 },

    #[error("depth {depth} exceeds the circular section diameter {diameter}")]
    DepthExceedsDiameter { depth: f64, diameter: f64 },

    #[error("wetted perimeter is zero at depth {depth}")]
    ZeroWettedPerimeter { depth: f64 },

    #[error("stone diameter must be positive, got {diameter}")]
    NonPositiveDiameter { diameter: f64 },

    #[error("stone with specific gravity {specific_gravity} floats")]
    NonBuoyantStone { specific_gravity: f64 },

    #[error("{quantity} has a zero denominator")]
    ZeroDenominator { quantity: &'static str },
}

/// Errors returned by the channel and riprap design entry points.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("solver failed")]
    Solver(#[source] equation::Error),
}

impl From<equation::Error> for DesignError {
    /// Recovers typed domain errors raised inside the solver's model or problem.
    fn from(err: equation::Error) -> Self {
        match err {
            equation::Error::Model(source) => {
                domain_or(source, |source| Self::Solver(equation::Error::Model(source)))
            }
            equation::Error::Problem(source) => {
                domain_or(source, |source| Self::Solver(equation::Error::Problem(source)))
            }
            other => Self::Solver(other),
        }
    }
}

fn domain_or(
    source: Box<dyn StdError + Send + Sync>,
    otherwise: impl FnOnce(Box<dyn StdError + Send + Sync>) -> DesignError,
) -> DesignError {
    match source.downcast::<DomainError>() {
        Ok(domain) => DesignError::Domain(*domain),
        Err(source) => otherwise(source),
    }
}
