use std::fmt;

use serde::{Deserialize, Serialize};

/// Manning's unit conversion factor for US customary channel flow.
pub const MANNING_FACTOR_US: f64 = 1.486;

/// Manning's unit conversion factor used by the riprap normal-depth relation.
///
/// Riprap references publish the rounded value; it is kept apart from
/// [`MANNING_FACTOR_US`] so both designs reproduce their reference results.
pub const RIPRAP_MANNING_FACTOR_US: f64 = 1.49;

/// The unit system every length, discharge, and rainfall depth is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Meters, seconds, cubic meters per second, millimeters of rain.
    #[default]
    Metric,

    /// Feet, seconds, cubic feet per second, inches of rain.
    UsCustomary,
}

impl UnitSystem {
    /// Returns `k` in Manning's `v = (k/n)·R^(2/3)·S^(1/2)`.
    #[must_use]
    pub fn manning_factor(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::UsCustomary => MANNING_FACTOR_US,
        }
    }

    /// Returns `k` for the riprap normal-depth relation.
    #[must_use]
    pub fn riprap_manning_factor(self) -> f64 {
        match self {
            Self::Metric => 1.0,
            Self::UsCustomary => RIPRAP_MANNING_FACTOR_US,
        }
    }

    /// Returns the specific weight of water (N/m³ or lb/ft³).
    #[must_use]
    pub fn water_specific_weight(self) -> f64 {
        match self {
            Self::Metric => 9810.0,
            Self::UsCustomary => 62.4,
        }
    }

    /// Returns the value of `n⁶·√(R·S)` above which flow is fully turbulent.
    #[must_use]
    pub fn turbulence_threshold(self) -> f64 {
        match self {
            Self::Metric => 1.1e-13,
            Self::UsCustomary => 1.9e-13,
        }
    }

    #[must_use]
    pub fn length_unit(self) -> &'static str {
        match self {
            Self::Metric => "m",
            Self::UsCustomary => "ft",
        }
    }

    #[must_use]
    pub fn discharge_unit(self) -> &'static str {
        match self {
            Self::Metric => "m³/s",
            Self::UsCustomary => "cfs",
        }
    }

    #[must_use]
    pub fn rainfall_unit(self) -> &'static str {
        match self {
            Self::Metric => "mm",
            Self::UsCustomary => "in",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("SI units"),
            Self::UsCustomary => f.write_str("US customary units"),
        }
    }
}
