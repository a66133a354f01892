//! Open-channel hydraulics for Sluice.
//!
//! - [`section`]: cross-section geometry (rectangular, triangular,
//!   trapezoidal, circular)
//! - [`manning`]: Manning's equation and the turbulence check
//! - [`channel`]: depth search for a channel that conveys a design discharge
//! - [`riprap`]: stone size search for a stable riprap lining
//!
//! Quantities are plain `f64`s in the units of the selected [`UnitSystem`]
//! (meters and seconds, or feet and seconds). Angles are `uom` quantities.

mod error;
mod units;

pub mod channel;
pub mod manning;
pub mod riprap;
pub mod section;

pub use error::{DesignError, DomainError};
pub use units::UnitSystem;
