//! Quantized sine table generation.
//!
//! One cycle of a sine wave is sampled at `samples_per_cycle` phase
//! points, scaled into the DAC's code range, clamped, and rounded. The
//! computation is pure: identical parameters always produce an identical
//! table.

use crate::types::{DacTable, WaveformParameters};
use crate::validation::{ensure_valid, ParameterError};
use std::f64::consts::TAU;

/// Generate one cycle of a quantized sine waveform.
///
/// Each sample is `offset + amplitude_dac * sin(2π·i / n)` where offset
/// is the real-valued midpoint of the code range and `amplitude_dac`
/// scales the normalized amplitude to half the range.
///
/// Samples are clamped to [0, 2^dac_bits − 1] before rounding: with
/// amplitude 1.0 the extremes land exactly on the range limits, and the
/// clamp keeps floating-point overshoot from rounding one code outside
/// the range. Rounding is half-away-from-zero (`f64::round`) throughout.
///
/// # Errors
///
/// Returns the first [`ParameterError`] if any precondition fails:
/// frequency_hz > 0, samples_per_cycle > 0, dac_bits in 1..=32,
/// amplitude in [0, 1].
pub fn generate(params: &WaveformParameters) -> Result<DacTable, ParameterError> {
    ensure_valid(params)?;

    let max_dac_value = params.max_dac_value() as f64;
    let offset = max_dac_value / 2.0;
    let amplitude_dac = params.amplitude * (max_dac_value / 2.0);
    let n = params.samples_per_cycle;

    let mut samples = Vec::with_capacity(n as usize);
    for i in 0..n {
        let phase = TAU * f64::from(i) / f64::from(n);
        let value = offset + amplitude_dac * phase.sin();
        // Clamp BEFORE rounding so boundary samples stay in range.
        let value = value.clamp(0.0, max_dac_value);
        samples.push(value.round() as u32);
    }

    let sample_rate_hz = params.frequency_hz * f64::from(n);

    Ok(DacTable {
        samples,
        sample_rate_hz,
        params: *params,
    })
}
