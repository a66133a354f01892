//! Design cases shared by the integration tests.

use serde::Deserialize;
use sluice_hydraulics::{UnitSystem, channel::ChannelInput, riprap::RiprapInput};
use sluice_solvers::equation::step_search;
use sluice_storm::{ScsStorm, StormError};
use uom::si::{f64::Time, time::hour};

/// The cases in `cases/textbook.toml`.
pub const TEXTBOOK: &str = include_str!("../cases/textbook.toml");

/// A set of design problems loaded from TOML.
#[derive(Debug, Deserialize)]
pub struct Cases {
    pub channel: ChannelCase,
    pub riprap: RiprapInput,
    pub storm: StormCase,
}

#[derive(Debug, Deserialize)]
pub struct ChannelCase {
    pub input: ChannelInput,
    #[serde(default)]
    pub search: step_search::Config,
}

#[derive(Debug, Deserialize)]
pub struct StormCase {
    pub rainfall: f64,
    pub duration_hours: f64,
    pub step_hours: f64,
    #[serde(default)]
    pub units: UnitSystem,
}

impl StormCase {
    /// Builds the storm this case describes.
    ///
    /// # Errors
    ///
    /// Returns a [`StormError`] if the case parameters are invalid.
    pub fn build(&self) -> Result<ScsStorm, StormError> {
        ScsStorm::new(
            self.rainfall,
            Time::new::<hour>(self.duration_hours),
            Time::new::<hour>(self.step_hours),
            self.units,
        )
    }
}

/// Parses a set of cases.
///
/// # Errors
///
/// Returns an error if `text` is not valid TOML or does not describe the cases.
pub fn parse(text: &str) -> Result<Cases, toml::de::Error> {
    toml::from_str(text)
}
