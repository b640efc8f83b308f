//! Time series buffers for one simulation run.

/// The waveforms of one capacitor simulation run.
///
/// Holds three parallel buffers, one value per timestep, plus the
/// capacitance the run was integrated with. All three buffers share one
/// length fixed at construction; index `n` denotes the same instant in
/// each of them.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    /// Timestamps in seconds, `time[n] = n * dt`
    pub time: Vec<f64>,
    /// Capacitor voltage in Volts
    pub voltage: Vec<f64>,
    /// Capacitor current in Amperes
    pub current: Vec<f64>,
    /// Capacitance in Farads, constant for the run
    pub capacitance: f64,
}

impl TimeSeries {
    /// Allocate zero-filled buffers for `num_timesteps` steps.
    pub fn new(num_timesteps: usize, capacitance: f64) -> Self {
        Self {
            time: vec![0.0; num_timesteps],
            voltage: vec![0.0; num_timesteps],
            current: vec![0.0; num_timesteps],
            capacitance,
        }
    }

    /// Number of timesteps in the run.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Check if the run has no timesteps.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
