//! Sampled text output.
//!
//! Walks a populated time series and prints every 200th step as one line
//! of fixed-point text. Labels run straight into values with no
//! separators, each value fixed to 10 fractional digits:
//!
//! ```text
//! Time(s)0.0000000000Voltage(V)0.0000000000Current(A)0.0100000000 A
//! ```

use std::io::Write;

use crate::error::{CapsimError, Result};
use crate::series::TimeSeries;

/// Every how many timesteps a sample line is emitted.
pub const SAMPLE_INTERVAL: usize = 200;

/// Write the sampled lines for a populated series to `writer`.
///
/// Emits one line per index in `0, 200, 400, ...`, i.e. exactly
/// `ceil(len / 200)` lines. The same format is used for both drive kinds.
pub fn write_samples<W: Write>(series: &TimeSeries, writer: &mut W) -> Result<()> {
    for n in (0..series.len()).step_by(SAMPLE_INTERVAL) {
        writeln!(
            writer,
            "Time(s){:.10}Voltage(V){:.10}Current(A){:.10} A",
            series.time[n], series.voltage[n], series.current[n],
        )
        .map_err(|e| CapsimError::output(e.to_string()))?;
    }
    Ok(())
}
