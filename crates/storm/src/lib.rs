//! Synthetic design storms from the SCS Type II and III rainfall curves.
//!
//! An [`ScsStorm`] spreads a rainfall depth over a storm duration centered on
//! hour 12 of the 24-hour SCS curve, producing the cumulative depth and the
//! incremental depth (hyetograph) at each time step.

mod curve;
mod error;
mod storm;
mod table;

pub use curve::scs_ordinate;
pub use error::StormError;
pub use storm::{MAX_SAMPLES, ScsStorm};
pub use table::{HEADERS, HyetographRow};
