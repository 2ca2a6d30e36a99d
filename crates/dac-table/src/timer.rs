//! Timer period derivation.
//!
//! A hardware timer firing at the table's sampling frequency needs its
//! period register (PRD) loaded with `clock / sample_rate − 1`. The clock
//! rate is an explicit value here, not a baked-in constant, since it
//! varies across targets (the CLI defaults to the 200 MHz CPU timer
//! clock of the reference board).

/// A timer input clock at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerClock {
    clock_hz: f64,
}

impl TimerClock {
    /// Create a clock at the given rate in Hz. Caller supplies a
    /// positive, finite value.
    pub fn new(clock_hz: f64) -> Self {
        Self { clock_hz }
    }

    /// The clock rate in Hz.
    pub fn clock_hz(&self) -> f64 {
        self.clock_hz
    }

    /// Exact period value for the given sampling frequency.
    pub fn period_value(&self, sample_rate_hz: f64) -> f64 {
        self.clock_hz / sample_rate_hz - 1.0
    }

    /// Period value rounded to the nearest integer, as loaded into the
    /// timer's PRD register.
    pub fn period_register(&self, sample_rate_hz: f64) -> i64 {
        self.period_value(sample_rate_hz).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_prd() {
        // 200 MHz clock, 10 kHz sampling: PRD = 19999
        let clock = TimerClock::new(200_000_000.0);
        assert_eq!(clock.period_register(10_000.0), 19_999);
    }

    #[test]
    fn test_period_value_is_exact() {
        let clock = TimerClock::new(200_000_000.0);
        assert_eq!(clock.period_value(10_000.0), 19_999.0);
    }

    #[test]
    fn test_non_integral_period_rounds() {
        let clock = TimerClock::new(1_000_000.0);
        // 1 MHz / 300 Hz = 3333.33…, minus 1 → 3332.33…, rounds to 3332
        assert_eq!(clock.period_register(300.0), 3332);
    }
}
