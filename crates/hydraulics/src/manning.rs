//! Manning's equation for uniform open-channel flow.
//!
//! All functions take the roughness coefficient `n`, hydraulic radius `R`,
//! and slope `S` in the units of the given [`UnitSystem`], which supplies the
//! conversion factor `k`.

use crate::{DomainError, UnitSystem};

/// Mean flow velocity `(k/n)·R^(2/3)·S^(1/2)`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroDenominator`] if `n` is zero.
pub fn velocity(
    n: f64,
    hydraulic_radius: f64,
    slope: f64,
    units: UnitSystem,
) -> Result<f64, DomainError> {
    #[allow(clippy::float_cmp)]
    if n == 0.0 {
        return Err(DomainError::ZeroDenominator {
            quantity: "Manning velocity",
        });
    }

    Ok((units.manning_factor() / n) * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt())
}

/// Discharge `A·v` through a section of flow area `A`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroDenominator`] if `n` is zero.
pub fn discharge(
    n: f64,
    area: f64,
    hydraulic_radius: f64,
    slope: f64,
    units: UnitSystem,
) -> Result<f64, DomainError> {
    Ok(area * velocity(n, hydraulic_radius, slope, units)?)
}

/// Flow depth in a wide channel of width `b` carrying discharge `Q`.
///
/// Solves Manning's equation with `R ≈ d`, giving
/// `d = ((n·Q)/(k·b·√S))^(3/5)`. Uses the riprap conversion factor.
///
/// # Errors
///
/// Returns [`DomainError::ZeroDenominator`] if `b` or `S` is zero.
pub fn normal_depth(
    n: f64,
    bottom_width: f64,
    discharge: f64,
    slope: f64,
    units: UnitSystem,
) -> Result<f64, DomainError> {
    let denominator = units.riprap_manning_factor() * bottom_width * slope.sqrt();

    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return Err(DomainError::ZeroDenominator {
            quantity: "normal depth",
        });
    }

    Ok(((n * discharge) / denominator).powf(3.0 / 5.0))
}

/// Outcome of the turbulence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turbulence {
    /// The criterion value `n⁶·√(R·S)`.
    pub value: f64,

    /// Whether `value` exceeds the unit system's threshold.
    pub turbulent: bool,
}

/// Checks whether Manning's equation applies, i.e. the flow is fully
/// turbulent (rough), by comparing `n⁶·√(R·S)` against a unit-dependent
/// threshold.
///
/// The result is informational; no solver refuses a design because of it.
#[must_use]
pub fn check_turbulent(n: f64, hydraulic_radius: f64, slope: f64, units: UnitSystem) -> Turbulence {
    let value = n.powi(6) * (hydraulic_radius * slope).sqrt();
    Turbulence {
        value,
        turbulent: value > units.turbulence_threshold(),
    }
}
