use crate::DomainError;

use super::{CrossSection, checked_depth, ratio};

/// A circular conduit of diameter `diameter` flowing partly full.
///
/// Geometry is expressed through the central angle `θ = 2·acos(1 − 2y/d)`
/// subtended by the free surface, which is only defined for `0 ≤ y ≤ d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circular {
    diameter: f64,
    depth: f64,
}

impl Circular {
    /// Creates a circular section at the given depth.
    ///
    /// A depth above the diameter is accepted here and reported by the
    /// geometric properties.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative.
    pub fn new(diameter: f64, depth: f64) -> Result<Self, DomainError> {
        Ok(Self {
            diameter,
            depth: checked_depth(depth)?,
        })
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns the central angle `θ` in radians.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DepthExceedsDiameter`] if `y > d`.
    pub fn central_angle(&self) -> Result<f64, DomainError> {
        if self.depth > self.diameter {
            return Err(DomainError::DepthExceedsDiameter {
                depth: self.depth,
                diameter: self.diameter,
            });
        }

        let cos_half = 1.0 - ratio(2.0 * self.depth, self.diameter, "central angle")?;
        Ok(2.0 * cos_half.acos())
    }
}

impl CrossSection for Circular {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError> {
        self.depth = checked_depth(depth)?;
        Ok(())
    }

    fn area(&self) -> Result<f64, DomainError> {
        let theta = self.central_angle()?;
        Ok((theta - theta.sin()) * self.diameter * self.diameter / 8.0)
    }

    fn wetted_perimeter(&self) -> Result<f64, DomainError> {
        Ok(0.5 * self.central_angle()? * self.diameter)
    }

    fn top_width(&self) -> Result<f64, DomainError> {
        Ok((0.5 * self.central_angle()?).sin() * self.diameter)
    }

    fn design_parameter(&self) -> Result<f64, DomainError> {
        let theta = self.central_angle()?;
        let d = self.diameter;

        let numerator = 4.0 * (2.0 * theta.sin() + 3.0 * theta - 5.0 * theta * theta.cos());
        let denominator = 3.0 * d * theta * (theta - theta.sin()) * (0.5 * theta).sin();
        ratio(numerator, denominator, "circular design parameter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn half_full() {
        let section = Circular::new(2.0, 1.0).unwrap();

        assert_relative_eq!(section.central_angle().unwrap(), PI);
        assert_relative_eq!(section.area().unwrap(), PI / 2.0);
        assert_relative_eq!(section.wetted_perimeter().unwrap(), PI);
        assert_relative_eq!(section.hydraulic_radius().unwrap(), 0.5);
        assert_relative_eq!(section.top_width().unwrap(), 2.0);
    }

    #[test]
    fn flowing_full_is_valid() {
        let section = Circular::new(2.0, 2.0).unwrap();

        assert_relative_eq!(section.area().unwrap(), PI, epsilon = 1e-12);
        assert_relative_eq!(section.wetted_perimeter().unwrap(), 2.0 * PI);
        assert_relative_eq!(section.hydraulic_radius().unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(section.top_width().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn overfull_is_a_domain_error() {
        let mut section = Circular::new(2.0, 1.0).unwrap();
        section.set_depth(2.5).unwrap();

        let expected = DomainError::DepthExceedsDiameter {
            depth: 2.5,
            diameter: 2.0,
        };
        assert_eq!(section.area(), Err(expected));
        assert_eq!(section.wetted_perimeter(), Err(expected));
        assert_eq!(section.hydraulic_radius(), Err(expected));
    }

    #[test]
    fn design_parameter_matches_finite_difference() {
        let h = 1e-6;
        let log_section_factor = |y: f64| {
            let s = Circular::new(2.0, y).unwrap();
            let a = s.area().unwrap();
            (a * s.hydraulic_radius().unwrap().powf(2.0 / 3.0)).ln()
        };
        let numeric = (log_section_factor(0.7 + h) - log_section_factor(0.7 - h)) / (2.0 * h);

        let section = Circular::new(2.0, 0.7).unwrap();
        assert_relative_eq!(section.design_parameter().unwrap(), numeric, epsilon = 1e-7);
    }
}
