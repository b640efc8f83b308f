//! Per-buffer fill routines for the two drive kinds.
//!
//! Both routines populate a pre-allocated [`TimeSeries`] in one straight
//! pass. They are stateless: everything they need arrives as arguments,
//! and nothing survives the call besides the filled buffers.

use crate::series::TimeSeries;

/// Fill the time axis: `time[n] = n * dt`.
fn fill_time_axis(series: &mut TimeSeries, dt: f64) {
    for (n, t) in series.time.iter_mut().enumerate() {
        *t = n as f64 * dt;
    }
}

/// Integrate the response to a constant current drive.
///
/// Forward Euler on dV/dt = I/C:
///   v[0] = 0
///   v[n] = v[n-1] + (I/C)·dt
/// The current buffer holds the drive value at every step.
pub(crate) fn fill_constant_current(series: &mut TimeSeries, amps: f64, dt: f64) {
    fill_time_axis(series, dt);

    let dv = (amps / series.capacitance) * dt;
    for n in 0..series.len() {
        series.voltage[n] = if n == 0 { 0.0 } else { series.voltage[n - 1] + dv };
        series.current[n] = amps;
    }
}

/// Recover the current under a constant voltage drive.
///
/// Backward difference on i = C·dV/dt:
///   i[0] = 0
///   i[n] = C·(v[n] - v[n-1])/dt
/// The voltage buffer holds the drive value at every step, so the
/// difference is zero everywhere. The t = 0 charging impulse of an ideal
/// step source falls between samples and is reported as zero.
pub(crate) fn fill_constant_voltage(series: &mut TimeSeries, volts: f64, dt: f64) {
    fill_time_axis(series, dt);

    for n in 0..series.len() {
        series.voltage[n] = volts;
        series.current[n] = if n == 0 {
            0.0
        } else {
            series.capacitance * (series.voltage[n] - series.voltage[n - 1]) / dt
        };
    }
}
