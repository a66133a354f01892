use crate::DomainError;

use super::{CrossSection, checked_depth, ratio};

/// A rectangular channel of bottom width `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangular {
    base: f64,
    depth: f64,
}

impl Rectangular {
    /// Creates a rectangular section at the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative.
    pub fn new(base: f64, depth: f64) -> Result<Self, DomainError> {
        Ok(Self {
            base,
            depth: checked_depth(depth)?,
        })
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl CrossSection for Rectangular {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError> {
        self.depth = checked_depth(depth)?;
        Ok(())
    }

    fn area(&self) -> Result<f64, DomainError> {
        Ok(self.base * self.depth)
    }

    fn wetted_perimeter(&self) -> Result<f64, DomainError> {
        Ok(self.base + 2.0 * self.depth)
    }

    fn top_width(&self) -> Result<f64, DomainError> {
        Ok(self.base)
    }

    fn design_parameter(&self) -> Result<f64, DomainError> {
        let (b, y) = (self.base, self.depth);
        ratio(
            5.0 * b + 6.0 * y,
            3.0 * y * (b + 2.0 * y),
            "rectangular design parameter",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn geometry() {
        let section = Rectangular::new(6.0, 2.0).unwrap();

        assert_relative_eq!(section.area().unwrap(), 12.0);
        assert_relative_eq!(section.wetted_perimeter().unwrap(), 10.0);
        assert_relative_eq!(section.top_width().unwrap(), 6.0);
    }

    #[test]
    fn hydraulic_radius_matches_closed_form() {
        for (b, y) in [(1.0, 0.5), (3.0, 1.0), (10.0, 0.25), (0.5, 4.0)] {
            let section = Rectangular::new(b, y).unwrap();
            assert_relative_eq!(
                section.hydraulic_radius().unwrap(),
                b * y / (b + 2.0 * y),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn design_parameter() {
        let section = Rectangular::new(3.0, 1.0).unwrap();
        assert_relative_eq!(section.design_parameter().unwrap(), 21.0 / 15.0);

        let dry = Rectangular::new(3.0, 0.0).unwrap();
        assert!(dry.design_parameter().is_err());
    }
}
