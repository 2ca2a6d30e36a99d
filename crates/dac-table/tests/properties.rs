//! Property-based tests for dac-table generation.
//!
//! Uses proptest to validate the table invariants across the whole valid
//! parameter space instead of hand-picked cases.

use dac_table::{generate, WaveformParameters};
use proptest::prelude::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 1_000,
        ..ProptestConfig::default()
    }
}

fn valid_frequency() -> impl Strategy<Value = f64> {
    0.01f64..1.0e6
}

fn valid_amplitude() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

/// Every valid parameter set yields exactly samples_per_cycle samples,
/// each within the DAC code range.
#[test]
fn test_length_and_range() {
    proptest!(proptest_config(), |(
        freq in valid_frequency(),
        n in 1u32..2048,
        bits in 1u32..=16,
        amp in valid_amplitude(),
    )| {
        let params = WaveformParameters::new(freq, n, bits, amp);
        let table = generate(&params).unwrap();

        prop_assert_eq!(table.len(), n as usize);
        let max = params.max_dac_value();
        for &s in &table.samples {
            prop_assert!(u64::from(s) <= max, "sample {} above {}", s, max);
        }
    });
}

/// Identical parameters always produce an identical table.
#[test]
fn test_determinism() {
    proptest!(proptest_config(), |(
        freq in valid_frequency(),
        n in 1u32..512,
        bits in 1u32..=16,
        amp in valid_amplitude(),
    )| {
        let params = WaveformParameters::new(freq, n, bits, amp);
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();

        prop_assert_eq!(&a.samples, &b.samples);
        prop_assert_eq!(a.sample_rate_hz, b.sample_rate_hz);
    });
}

/// Increasing the amplitude never decreases the table's swing.
#[test]
fn test_amplitude_monotonicity() {
    proptest!(proptest_config(), |(
        n in 1u32..512,
        bits in 1u32..=16,
        lo in valid_amplitude(),
        hi in valid_amplitude(),
    )| {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        let small = generate(&WaveformParameters::new(50.0, n, bits, lo)).unwrap();
        let large = generate(&WaveformParameters::new(50.0, n, bits, hi)).unwrap();

        prop_assert!(
            small.swing() <= large.swing(),
            "swing decreased: amp {} -> {} gave {} -> {}",
            lo, hi, small.swing(), large.swing()
        );
    });
}

/// Derived sampling frequency is exactly frequency × samples_per_cycle.
#[test]
fn test_derived_frequency_law() {
    proptest!(proptest_config(), |(
        freq in valid_frequency(),
        n in 1u32..4096,
    )| {
        let params = WaveformParameters::new(freq, n, 12, 1.0);
        let table = generate(&params).unwrap();

        prop_assert_eq!(table.sample_rate_hz, freq * f64::from(n));
    });
}
