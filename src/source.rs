//! Ideal drive sources.

/// An ideal source driving the capacitor for a whole run.
///
/// Both kinds are constant over the run. A voltage drive is applied as a
/// step at t = 0, so its value holds from the first timestep onward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// Constant current drive in Amperes.
    Current(f64),
    /// Constant voltage drive in Volts.
    Voltage(f64),
}

impl Source {
    /// Get the drive magnitude in SI units (Amperes or Volts).
    pub fn value(&self) -> f64 {
        match self {
            Source::Current(amps) => *amps,
            Source::Voltage(volts) => *volts,
        }
    }

    /// Human-readable name of the drive kind.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Current(_) => "constant current source",
            Source::Voltage(_) => "constant voltage source",
        }
    }
}
