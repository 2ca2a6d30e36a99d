//! Types for waveform table generation.
//!
//! These types carry the input parameters and the generated table through
//! the pipeline. Both are plain data: constructed once, never mutated.

/// The four scalar inputs that define a waveform table.
///
/// Validated once at entry by [`crate::validation::validate_parameters`];
/// everything downstream trusts the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformParameters {
    /// Waveform frequency in Hz. Must be positive and finite.
    pub frequency_hz: f64,

    /// Number of discrete phase points representing one full period.
    pub samples_per_cycle: u32,

    /// DAC resolution in bits (e.g. 12 for codes 0..=4095). 1..=32.
    pub dac_bits: u32,

    /// Amplitude as a fraction of the DAC's full swing, in [0, 1].
    pub amplitude: f64,
}

impl WaveformParameters {
    pub fn new(frequency_hz: f64, samples_per_cycle: u32, dac_bits: u32, amplitude: f64) -> Self {
        Self {
            frequency_hz,
            samples_per_cycle,
            dac_bits,
            amplitude,
        }
    }

    /// The largest code the DAC can represent: 2^dac_bits − 1.
    ///
    /// Returned as u64 so the computation is well-defined for any
    /// dac_bits up to 63, even before validation has run.
    pub fn max_dac_value(&self) -> u64 {
        if self.dac_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.dac_bits) - 1
        }
    }
}

/// One complete cycle of a quantized waveform, in playback order.
#[derive(Debug, Clone, PartialEq)]
pub struct DacTable {
    /// The DAC codes, ordered by phase index 0..samples_per_cycle.
    pub samples: Vec<u32>,

    /// Sampling frequency the timer must achieve to play one cycle at
    /// the requested waveform frequency: frequency_hz × samples_per_cycle.
    pub sample_rate_hz: f64,

    /// The parameters the table was generated from.
    pub params: WaveformParameters,
}

impl DacTable {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest generated code.
    pub fn min_sample(&self) -> u32 {
        self.samples.iter().copied().min().unwrap_or(0)
    }

    /// Largest generated code.
    pub fn max_sample(&self) -> u32 {
        self.samples.iter().copied().max().unwrap_or(0)
    }

    /// Peak-to-peak swing of the generated codes.
    pub fn swing(&self) -> u32 {
        self.max_sample() - self.min_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_dac_value() {
        let p = WaveformParameters::new(50.0, 200, 12, 1.0);
        assert_eq!(p.max_dac_value(), 4095);

        let p8 = WaveformParameters::new(50.0, 200, 8, 1.0);
        assert_eq!(p8.max_dac_value(), 255);

        let p32 = WaveformParameters::new(50.0, 200, 32, 1.0);
        assert_eq!(p32.max_dac_value(), 4_294_967_295);
    }

    #[test]
    fn test_table_stats() {
        let params = WaveformParameters::new(1.0, 3, 12, 1.0);
        let table = DacTable {
            samples: vec![0, 2048, 4095],
            sample_rate_hz: 3.0,
            params,
        };

        assert_eq!(table.len(), 3);
        assert_eq!(table.min_sample(), 0);
        assert_eq!(table.max_sample(), 4095);
        assert_eq!(table.swing(), 4095);
    }
}
