use crate::DomainError;

use super::{CrossSection, checked_depth, ratio};

/// A trapezoidal channel of bottom width `base` and side slopes of
/// 1 vertical to `side_slope` horizontal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoidal {
    base: f64,
    side_slope: f64,
    depth: f64,
}

impl Trapezoidal {
    /// Creates a trapezoidal section at the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeDepth`] if `depth` is negative.
    pub fn new(base: f64, side_slope: f64, depth: f64) -> Result<Self, DomainError> {
        Ok(Self {
            base,
            side_slope,
            depth: checked_depth(depth)?,
        })
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn side_slope(&self) -> f64 {
        self.side_slope
    }
}

impl CrossSection for Trapezoidal {
    fn depth(&self) -> f64 {
        self.depth
    }

    fn set_depth(&mut self, depth: f64) -> Result<(), DomainError> {
        self.depth = checked_depth(depth)?;
        Ok(())
    }

    fn area(&self) -> Result<f64, DomainError> {
        Ok((self.base + self.side_slope * self.depth) * self.depth)
    }

    fn wetted_perimeter(&self) -> Result<f64, DomainError> {
        Ok(self.base + 2.0 * self.depth * self.side_slope.hypot(1.0))
    }

    fn top_width(&self) -> Result<f64, DomainError> {
        Ok(self.base + 2.0 * self.side_slope * self.depth)
    }

    fn design_parameter(&self) -> Result<f64, DomainError> {
        let (b, z, y) = (self.base, self.side_slope, self.depth);
        let s = z.hypot(1.0);

        let numerator = (b + 2.0 * z * y) * (5.0 * b + 6.0 * y * s) + 4.0 * z * y * y * s;
        let denominator = 3.0 * y * (b + z * y) * (b + 2.0 * y * s);
        ratio(numerator, denominator, "trapezoidal design parameter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn geometry() {
        let section = Trapezoidal::new(6.0, 3.0, 2.0).unwrap();

        assert_relative_eq!(section.area().unwrap(), 24.0);
        assert_relative_eq!(
            section.wetted_perimeter().unwrap(),
            6.0 + 4.0 * 10.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(section.top_width().unwrap(), 18.0);
    }

    #[test]
    fn reduces_to_rectangle_without_side_slope() {
        let trapezoid = Trapezoidal::new(4.0, 0.0, 1.5).unwrap();
        let rectangle = super::super::Rectangular::new(4.0, 1.5).unwrap();

        assert_relative_eq!(
            trapezoid.hydraulic_radius().unwrap(),
            rectangle.hydraulic_radius().unwrap()
        );
        assert_relative_eq!(
            trapezoid.design_parameter().unwrap(),
            rectangle.design_parameter().unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn design_parameter_matches_finite_difference() {
        let h = 1e-6;
        let log_section_factor = |y: f64| {
            let s = Trapezoidal::new(6.0, 3.0, y).unwrap();
            let a = s.area().unwrap();
            (a * s.hydraulic_radius().unwrap().powf(2.0 / 3.0)).ln()
        };
        let numeric = (log_section_factor(1.2 + h) - log_section_factor(1.2 - h)) / (2.0 * h);

        let section = Trapezoidal::new(6.0, 3.0, 1.2).unwrap();
        assert_relative_eq!(section.design_parameter().unwrap(), numeric, epsilon = 1e-7);
        assert_relative_eq!(section.design_parameter().unwrap(), 1.599_454_689, epsilon = 1e-8);
    }
}
