//! Cross-section geometry for open channels.
//!
//! Each shape is a small value type holding its dimensions and the current
//! flow depth. Depth changes only through [`CrossSection::set_depth`]; every
//! geometric property is recomputed from the current state on each call.
//!
//! [`Shape`] names a shape and its dimensions without a depth, and
//! [`Section`] is a shape at a depth, usable wherever a concrete type is
//! needed.

mod circular;
mod rectangular;
mod shape;
mod trapezoidal;
mod triangular;

pub use circular::Circular;
pub use rectangular::Rectangular;
pub use shape::{Shape, ShapeError};
pub use trapezoidal::Trapezoidal;
pub use triangular::Triangular;

use crate::DomainError;

/// Geometric properties of a channel cross section at its current depth.
pub trait CrossSection {
    /// Returns the current flow depth.
    fn depth(&self) -> f64;

    /// Replaces the flow depth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative or NaN.
    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError>;

    /// Returns the flow area.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the depth is outside the shape's domain.
    fn area(&self) -> Result<f64, DomainError>;

    /// Returns the wetted perimeter.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the depth is outside the shape's domain.
    fn wetted_perimeter(&self) -> Result<f64, DomainError>;

    /// Returns the width of the free surface.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the depth is outside the shape's domain.
    fn top_width(&self) -> Result<f64, DomainError>;

    /// Returns `d ln(A·R^(2/3)) / dy`, the relative rate at which the section
    /// factor grows with depth.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] at zero depth or outside the shape's domain.
    fn design_parameter(&self) -> Result<f64, DomainError>;

    /// Returns the hydraulic radius, flow area over wetted perimeter.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroWettedPerimeter`] if the wetted perimeter
    /// is zero, or any error from [`area`](Self::area) and
    /// [`wetted_perimeter`](Self::wetted_perimeter).
    fn hydraulic_radius(&self) -> Result<f64, DomainError> {
        let perimeter = self.wetted_perimeter()?;

        #[allow(clippy::float_cmp)]
        if perimeter == 0.0 {
            return Err(DomainError::ZeroWettedPerimeter {
                depth: self.depth(),
            });
        }

        Ok(self.area()? / perimeter)
    }
}

/// A cross section of any supported shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Rectangular(Rectangular),
    Triangular(Triangular),
    Trapezoidal(Trapezoidal),
    Circular(Circular),
}

impl Section {
    fn inner(&self) -> &dyn CrossSection {
        match self {
            Self::Rectangular(s) => s,
            Self::Triangular(s) => s,
            Self::Trapezoidal(s) => s,
            Self::Circular(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CrossSection {
        match self {
            Self::Rectangular(s) => s,
            Self::Triangular(s) => s,
            Self::Trapezoidal(s) => s,
            Self::Circular(s) => s,
        }
    }

    /// Returns the shape and dimensions of this section.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Rectangular(s) => Shape::Rectangular { base: s.base() },
            Self::Triangular(s) => Shape::Triangular {
                side_slope: s.side_slope(),
            },
            Self::Trapezoidal(s) => Shape::Trapezoidal {
                base: s.base(),
                side_slope: s.side_slope(),
            },
            Self::Circular(s) => Shape::Circular {
                diameter: s.diameter(),
            },
        }
    }
}

impl CrossSection for Section {
    fn depth(&self) -> f64 {
        self.inner().depth()
    }

    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError> {
        self.inner_mut().set_depth(depth)
    }

    fn area(&self) -> Result<f64, DomainError> {
        self.inner().area()
    }

    fn wetted_perimeter(&self) -> Result<f64, DomainError> {
        self.inner().wetted_perimeter()
    }

    fn top_width(&self) -> Result<f64, DomainError> {
        self.inner().top_width()
    }

    fn design_parameter(&self) -> Result<f64, DomainError> {
        self.inner().design_parameter()
    }

    fn hydraulic_radius(&self) -> Result<f64, DomainError> {
        self.inner().hydraulic_radius()
    }
}

/// Accepts non-negative depths.
pub(crate) fn checked_depth(depth: f64) -> Result<f64, DomainError> {
    if depth >= 0.0 {
        Ok(depth)
    } else {
        Err(DomainError::NegativeDepth { depth })
    }
}

/// Divides, reporting a zero denominator as a domain error.
pub(crate) fn ratio(
    numerator: f64,
    denominator: f64,
    quantity: &'static str,
) -> Result<f64, DomainError> {
    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return Err(DomainError::ZeroDenominator { quantity });
    }
    Ok(numerator / denominator)
}
