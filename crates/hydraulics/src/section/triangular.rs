use crate::DomainError;

use super::{CrossSection, checked_depth, ratio};

/// A triangular (V-shaped) channel with side slopes of 1 vertical to
/// `side_slope` horizontal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    side_slope: f64,
    depth: f64,
}

impl Triangular {
    /// Creates a triangular section at the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative.
    pub fn new(side_slope: f64, depth: f64) -> Result<Self, DomainError> {
        Ok(Self {
            side_slope,
            depth: checked_depth(depth)?,
        })
    }

    #[must_use]
    pub fn side_slope(&self) -> f64 {
        self.side_slope
    }
}

impl CrossSection for Triangular {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError> {
        self.depth = checked_depth(depth)?;
        Ok(())
    }

    fn area(&self) -> Result<f64, DomainError> {
        Ok(self.side_slope * self.depth * self.depth)
    }

    fn wetted_perimeter(&self) -> Result<f64, DomainError> {
        Ok(2.0 * self.depth * self.side_slope.hypot(1.0))
    }

    fn top_width(&self) -> Result<f64, DomainError> {
        Ok(2.0 * self.side_slope * self.depth)
    }

    fn design_parameter(&self) -> Result<f64, DomainError> {
        ratio(8.0, 3.0 * self.depth, "triangular design parameter")
    }
}
