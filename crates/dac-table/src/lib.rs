//! # dac-table
//!
//! Generates quantized sinusoidal lookup tables for driving a DAC from a
//! hardware timer, and emits them as compilable C source.
//!
//! The pipeline is a straight line:
//!
//! ```text
//! WaveformParameters ──▶ generate ──▶ DacTable ──▶ emitter ──▶ .c file
//!                          │                          │
//!                     validation                 TimerClock (PRD)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use dac_table::{generate, WaveformParameters, TimerClock};
//!
//! let params = WaveformParameters::new(50.0, 200, 12, 1.0);
//! let table = generate(&params)?;
//! let prd = TimerClock::new(200_000_000.0).period_register(table.sample_rate_hz);
//! ```

pub mod emitter;
pub mod generator;
pub mod timer;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use emitter::{render_c_source, render_c_source_at, write_c_source, CSourceOptions};
pub use generator::generate;
pub use timer::TimerClock;
pub use types::{DacTable, WaveformParameters};
pub use validation::{validate_parameters, ParameterError, ParameterErrorCode, ValidationResult};
