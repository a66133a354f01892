use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DomainError;

use super::{Circular, Rectangular, Section, Trapezoidal, Triangular};

/// The shape of a cross section and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rectangular { base: f64 },
    Triangular { side_slope: f64 },
    Trapezoidal { base: f64, side_slope: f64 },
    Circular { diameter: f64 },
}

/// Errors for shape dimensions that cannot describe a channel.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("cannot design channel: no cross section has base {base} and side slope {side_slope}")]
    NoMatchingShape { base: f64, side_slope: f64 },

    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

impl Shape {
    /// Picks a prismatic shape from a bottom width and a side slope.
    ///
    /// A zero value means the dimension is absent: base only gives a
    /// rectangle, side slope only a triangle, both a trapezoid.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoMatchingShape`] when neither dimension is
    /// positive or either is negative.
    pub fn from_dimensions(base: f64, side_slope: f64) -> Result<Self, ShapeError> {
        #[allow(clippy::float_cmp)]
        let shape = match (base, side_slope) {
            (b, z) if b > 0.0 && z == 0.0 => Self::Rectangular { base: b },
            (b, z) if b == 0.0 && z > 0.0 => Self::Triangular { side_slope: z },
            (b, z) if b > 0.0 && z > 0.0 => Self::Trapezoidal {
                base: b,
                side_slope: z,
            },
            _ => return Err(ShapeError::NoMatchingShape { base, side_slope }),
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Checks that every dimension is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidDimension`] naming the first bad dimension.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let check = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ShapeError::InvalidDimension { name, value })
            }
        };

        match *self {
            Self::Rectangular { base } => check("base", base),
            Self::Triangular { side_slope } => check("side slope", side_slope),
            Self::Trapezoidal { base, side_slope } => {
                check("base", base)?;
                check("side slope", side_slope)
            }
            Self::Circular { diameter } => check("diameter", diameter),
        }
    }

    /// Builds a section of this shape at the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative.
    pub fn at_depth(self, depth: f64) -> Result<Section, DomainError> {
        Ok(match self {
            Self::Rectangular { base } => Section::Rectangular(Rectangular::new(base, depth)?),
            Self::Triangular { side_slope } => {
                Section::Triangular(Triangular::new(side_slope, depth)?)
            }
            Self::Trapezoidal { base, side_slope } => {
                Section::Trapezoidal(Trapezoidal::new(base, side_slope, depth)?)
            }
            Self::Circular { diameter } => Section::Circular(Circular::new(diameter, depth)?),
        })
    }
}
