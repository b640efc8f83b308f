//! # Capsim Core
//!
//! A transient simulator for an ideal capacitor under constant drive.
//!
//! This library provides:
//! - A fixed-step time series model of a single capacitor (I = C·dV/dt)
//! - Two excitation modes: constant current source and constant voltage source
//! - A sampling reporter that prints every 200th timestep
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`series`] - Time series buffers (time, voltage, current)
//! - [`source`] - The two ideal drive kinds
//! - [`solver`] - Fixed-step integration engine
//! - [`report`] - Sampled text output
//!
//! ## Usage
//!
//! ```no_run
//! use capsim_core::{Simulator, SimulatorConfig, Source};
//!
//! let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
//! let series = simulator.run(Source::Current(1.0e-2));
//! capsim_core::report::write_samples(&series, &mut std::io::stdout()).unwrap();
//! ```
//!
//! ## Simulation Method
//!
//! Time is discretized into `num_timesteps` steps of dt = total_time / num_timesteps.
//! Under a constant current the voltage is advanced by explicit (forward) Euler
//! integration of dV/dt = I/C. Under a constant voltage the current is recovered
//! by a backward difference, i = C·(v[n] - v[n-1])/dt, which is zero everywhere
//! for a constant drive; the t = 0 charging impulse of an ideal step source is
//! outside what this scheme can represent and is reported as zero.

pub mod error;
pub mod report;
pub mod series;
pub mod solver;
pub mod source;

// Re-export main types for convenience
pub use error::{CapsimError, Result};
pub use series::TimeSeries;
pub use solver::{Simulator, SimulatorConfig};
pub use source::Source;

/// Default number of timesteps per simulation run.
pub const DEFAULT_NUM_TIMESTEPS: usize = 50_000;

/// Default simulated interval in seconds.
pub const DEFAULT_TOTAL_TIME: f64 = 5.0e-6;

/// Default capacitance in Farads.
pub const DEFAULT_CAPACITANCE: f64 = 100.0e-12;

/// Default constant-current drive in Amperes.
pub const DEFAULT_CONSTANT_CURRENT: f64 = 1.0e-2;

/// Default constant-voltage drive in Volts.
pub const DEFAULT_CONSTANT_VOLTAGE: f64 = 10.0;
