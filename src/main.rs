//! Capsim - Ideal Capacitor Transient Simulator
//!
//! Runs the constant-current and constant-voltage simulations over the
//! compiled-in constants and prints every 200th sample to stdout.
//!
//! # Usage
//!
//! ```bash
//! capsim > response.txt
//! ```

use std::io;

use capsim_core::{
    error::Result,
    report,
    Simulator, SimulatorConfig, Source,
    DEFAULT_CONSTANT_CURRENT, DEFAULT_CONSTANT_VOLTAGE,
};
use clap::Parser;

/// Ideal capacitor transient simulator
///
/// All simulation parameters are compiled in; there is nothing to configure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let simulator = Simulator::new(SimulatorConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Current drive first, then voltage drive.
    for source in [
        Source::Current(DEFAULT_CONSTANT_CURRENT),
        Source::Voltage(DEFAULT_CONSTANT_VOLTAGE),
    ] {
        let series = simulator.run(source);
        report::write_samples(&series, &mut out)?;
    }

    Ok(())
}
