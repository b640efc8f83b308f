//! Main simulator interface.

use crate::error::{CapsimError, Result};
use crate::series::TimeSeries;
use crate::source::Source;

use super::{fill_constant_current, fill_constant_voltage};

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Number of timesteps per run.
    pub num_timesteps: usize,
    /// Simulated interval in seconds.
    pub total_time: f64,
    /// Capacitance in Farads.
    pub capacitance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            num_timesteps: crate::DEFAULT_NUM_TIMESTEPS,
            total_time: crate::DEFAULT_TOTAL_TIME,
            capacitance: crate::DEFAULT_CAPACITANCE,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of timesteps.
    pub fn with_num_timesteps(mut self, num_timesteps: usize) -> Self {
        self.num_timesteps = num_timesteps;
        self
    }

    /// Set the simulated interval in seconds.
    pub fn with_total_time(mut self, total_time: f64) -> Self {
        self.total_time = total_time;
        self
    }

    /// Set the capacitance in Farads.
    pub fn with_capacitance(mut self, capacitance: f64) -> Self {
        self.capacitance = capacitance;
        self
    }

    /// Reject degenerate parameters before any integration runs.
    ///
    /// `num_timesteps = 0` or `total_time <= 0` would make dt meaningless
    /// (division by zero), and `capacitance <= 0` has no physical reading.
    pub fn validate(&self) -> Result<()> {
        if self.num_timesteps == 0 {
            return Err(CapsimError::invalid_parameter(
                "num_timesteps",
                "must be greater than zero",
            ));
        }
        if self.total_time <= 0.0 {
            return Err(CapsimError::invalid_parameter(
                "total_time",
                format!("must be positive, got {}", self.total_time),
            ));
        }
        if self.capacitance <= 0.0 {
            return Err(CapsimError::invalid_parameter(
                "capacitance",
                format!("must be positive, got {}", self.capacitance),
            ));
        }
        Ok(())
    }
}

/// The capacitor simulator.
///
/// Owns a validated configuration and the derived timestep. Each solve
/// call allocates and fills an independent [`TimeSeries`]; runs share no
/// state.
pub struct Simulator {
    /// Validated run configuration
    config: SimulatorConfig,
    /// Time step (total_time / num_timesteps)
    dt: f64,
}

impl Simulator {
    /// Create a new simulator, validating the configuration.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        let dt = config.total_time / config.num_timesteps as f64;
        Ok(Self { config, dt })
    }

    /// Get the timestep in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Get the run configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate the response to a constant current drive of `amps` Amperes.
    pub fn solve_constant_current(&self, amps: f64) -> TimeSeries {
        let mut series = self.allocate();
        fill_constant_current(&mut series, amps, self.dt);
        series
    }

    /// Simulate the response to a constant voltage drive of `volts` Volts.
    pub fn solve_constant_voltage(&self, volts: f64) -> TimeSeries {
        let mut series = self.allocate();
        fill_constant_voltage(&mut series, volts, self.dt);
        series
    }

    /// Run one simulation, dispatching on the drive kind.
    pub fn run(&self, source: Source) -> TimeSeries {
        match source {
            Source::Current(amps) => self.solve_constant_current(amps),
            Source::Voltage(volts) => self.solve_constant_voltage(volts),
        }
    }

    fn allocate(&self) -> TimeSeries {
        TimeSeries::new(self.config.num_timesteps, self.config.capacitance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CapsimError;
    use approx::assert_abs_diff_eq;

    fn small_config() -> SimulatorConfig {
        SimulatorConfig::new()
            .with_num_timesteps(5)
            .with_total_time(5.0)
            .with_capacitance(1.0)
    }

    #[test]
    fn test_config_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.num_timesteps, crate::DEFAULT_NUM_TIMESTEPS);
        assert_abs_diff_eq!(config.total_time, crate::DEFAULT_TOTAL_TIME);
        assert_abs_diff_eq!(config.capacitance, crate::DEFAULT_CAPACITANCE);
    }

    #[test]
    fn test_dt_derivation() {
        let simulator = Simulator::new(small_config()).unwrap();
        assert_abs_diff_eq!(simulator.dt(), 1.0, epsilon = 1e-15);

        let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
        assert_abs_diff_eq!(simulator.dt(), 1.0e-10, epsilon = 1e-24);
    }

    #[test]
    fn test_rejects_zero_timesteps() {
        let config = small_config().with_num_timesteps(0);
        match Simulator::new(config) {
            Err(CapsimError::InvalidParameter { param, .. }) => {
                assert_eq!(param, "num_timesteps");
            }
            other => panic!("expected InvalidParameter, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_rejects_nonpositive_total_time() {
        let config = small_config().with_total_time(0.0);
        match Simulator::new(config) {
            Err(CapsimError::InvalidParameter { param, .. }) => {
                assert_eq!(param, "total_time");
            }
            other => panic!("expected InvalidParameter, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_rejects_nonpositive_capacitance() {
        let config = small_config().with_capacitance(-1.0e-12);
        match Simulator::new(config) {
            Err(CapsimError::InvalidParameter { param, .. }) => {
                assert_eq!(param, "capacitance");
            }
            other => panic!("expected InvalidParameter, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_solve_constant_current_scenario() {
        let simulator = Simulator::new(small_config()).unwrap();
        let series = simulator.solve_constant_current(2.0);

        let expected_v = [0.0, 2.0, 4.0, 6.0, 8.0];
        for n in 0..series.len() {
            assert_abs_diff_eq!(series.voltage[n], expected_v[n], epsilon = 1e-12);
            assert_abs_diff_eq!(series.current[n], 2.0);
            assert_abs_diff_eq!(series.time[n], n as f64, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_solve_constant_voltage_scenario() {
        let config = SimulatorConfig::new()
            .with_num_timesteps(4)
            .with_total_time(4.0)
            .with_capacitance(1.0);
        let simulator = Simulator::new(config).unwrap();
        let series = simulator.solve_constant_voltage(10.0);

        for n in 0..series.len() {
            assert_abs_diff_eq!(series.voltage[n], 10.0);
            assert_abs_diff_eq!(series.current[n], 0.0);
        }
    }

    #[test]
    fn test_run_dispatches_on_source() {
        let simulator = Simulator::new(small_config()).unwrap();

        let direct = simulator.solve_constant_current(2.0);
        let dispatched = simulator.run(Source::Current(2.0));
        assert_eq!(direct.voltage, dispatched.voltage);
        assert_eq!(direct.current, dispatched.current);

        let direct = simulator.solve_constant_voltage(10.0);
        let dispatched = simulator.run(Source::Voltage(10.0));
        assert_eq!(direct.voltage, dispatched.voltage);
        assert_eq!(direct.current, dispatched.current);
    }

    #[test]
    fn test_runs_are_independent() {
        let simulator = Simulator::new(small_config()).unwrap();
        let first = simulator.solve_constant_current(2.0);
        let _second = simulator.solve_constant_voltage(10.0);
        // The first run's buffers are untouched by the second solve.
        assert_abs_diff_eq!(first.voltage[4], 8.0, epsilon = 1e-12);
    }
}
