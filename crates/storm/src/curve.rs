/// Hour at which the SCS curve reaches half of the 24-hour depth.
pub(crate) const PEAK_HOUR: f64 = 12.0;

/// Length of the SCS curve in hours.
pub(crate) const CURVE_HOURS: f64 = 24.0;

/// Fraction of the 24-hour rainfall fallen by hour `t` on the SCS Type II
/// and III curves.
///
/// Uses the Cronshey and Norman approximation
/// `P(t)/P24 = 0.5 + (T/24)·(24.04/(2|T| + 0.04))^0.75` with `T = t − 12`.
/// The value is 0 at `t = 0`, 0.5 at `t = 12`, and 1 at `t = 24`.
#[must_use]
pub fn scs_ordinate(t: f64) -> f64 {
    let centered = t - PEAK_HOUR;
    0.5 + (centered / CURVE_HOURS) * (24.04 / (2.0 * centered.abs() + 0.04)).powf(0.75)
}
