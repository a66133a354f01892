use std::fmt::{self, Write};

use serde::Serialize;
use uom::si::time::hour;

use crate::ScsStorm;

/// Column headers of a hyetograph table, in [`HyetographRow`] field order.
pub const HEADERS: [&str; 4] = ["Time", "P/P24", "Depth", "Incremental Depth"];

/// One time step of a storm, ready for a tabular writer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HyetographRow {
    /// Hours on the 24-hour clock.
    pub time: f64,
    pub ordinate: f64,
    /// Cumulative rainfall depth.
    pub depth: f64,
    pub increment: f64,
}

impl ScsStorm {
    /// Iterates over the storm one time step at a time.
    pub fn rows(&self) -> impl Iterator<Item = HyetographRow> + '_ {
        self.time()
            .iter()
            .zip(self.ordinates())
            .zip(self.cumulative())
            .zip(self.hyetograph())
            .map(|(((&time, &ordinate), &depth), &increment)| HyetographRow {
                time,
                ordinate,
                depth,
                increment,
            })
    }

    /// Renders the dimensionless curve as a two-column table.
    #[must_use]
    pub fn curve_table(&self) -> String {
        let mut text = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_curve(&mut text);
        text
    }

    /// Renders the storm window and every time step.
    #[must_use]
    pub fn table(&self) -> String {
        let mut text = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_table(&mut text);
        text
    }

    fn write_curve(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "SCS Curve Types II and III")?;
        writeln!(out, "{:>8} {:>8}", HEADERS[0], HEADERS[1])?;
        for (t, p) in self.time().iter().zip(self.ordinates()) {
            writeln!(out, "{t:8.2} {p:8.4}")?;
        }
        Ok(())
    }

    fn write_table(&self, out: &mut impl Write) -> fmt::Result {
        let (Some(start), Some(end)) = (self.time().first(), self.time().last()) else {
            return writeln!(out, "There are no results to show.");
        };

        writeln!(out, " Start time: {start} h")?;
        writeln!(out, " End time: {end} h")?;
        writeln!(out, "SCS Curve Types II and III\n")?;
        writeln!(
            out,
            "{:>8} {:>8} {:>8} {:>8}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
        )?;
        for row in self.rows() {
            writeln!(
                out,
                "{:8.2} {:8.4} {:8.4} {:8.4}",
                row.time, row.ordinate, row.depth, row.increment
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ScsStorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SCS storm ({})", self.units())?;
        writeln!(f, " Rainfall: {} {}", self.rainfall(), self.units().rainfall_unit())?;
        writeln!(f, " Duration: {} h", self.duration().get::<hour>())?;
        writeln!(f, " Time step: {} h", self.step().get::<hour>())?;
        self.write_table(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sluice_hydraulics::UnitSystem;
    use uom::si::f64::Time;

    fn storm(duration: f64) -> ScsStorm {
        ScsStorm::new(
            6.8,
            Time::new::<hour>(duration),
            Time::new::<hour>(0.25),
            UnitSystem::UsCustomary,
        )
        .expect("valid storm")
    }

    #[test]
    fn rows_line_up_with_the_sequences() {
        let storm = storm(3.0);
        let rows: Vec<_> = storm.rows().collect();

        assert_eq!(rows.len(), storm.len());
        assert_eq!(rows[6].time.to_bits(), 12.0_f64.to_bits());
        assert_eq!(rows[6].increment.to_bits(), storm.hyetograph()[6].to_bits());
    }

    #[test]
    fn table_lists_every_step() {
        let table = storm(3.0).table();

        assert!(table.contains(" Start time: 10.5 h"));
        assert!(table.contains(" End time: 13.5 h"));
        assert!(table.contains("Incremental Depth"));
        assert!(table.contains("   12.00   0.5000   3.4000   2.0710"));
        assert_eq!(table.lines().filter(|l| l.starts_with("   1")).count(), 13);
    }

    #[test]
    fn curve_table_has_two_columns() {
        let table = storm(3.0).curve_table();

        assert!(table.starts_with("SCS Curve Types II and III\n"));
        assert!(table.contains("   10.50   0.2053"));
        assert_eq!(table.lines().count(), 15);
    }

    #[test]
    fn display_summarizes_the_storm() {
        let text = storm(3.0).to_string();

        assert!(text.starts_with("SCS storm (US customary units)\n Rainfall: 6.8 in\n"));
        assert!(text.contains(" Duration: 3 h"));
        assert!(text.contains(" Time step: 0.25 h"));
    }

    #[test]
    fn empty_storm_has_nothing_to_show() {
        let storm = storm(0.0);

        assert_eq!(storm.rows().count(), 0);
        assert!(storm.to_string().ends_with("There are no results to show.\n"));
    }
}
