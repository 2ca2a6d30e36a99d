//! Parameter validation for waveform table generation.
//!
//! Validation runs once, up front, before any computation or output.
//! Each failing field is reported with its own error code so callers
//! (interactive shells, scripts) can decide how to re-prompt.
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | E001 | Invalid waveform frequency |
//! | E002 | Invalid samples per cycle |
//! | E003 | Invalid DAC bit depth |
//! | E004 | Invalid normalized amplitude |

use crate::types::WaveformParameters;
use std::fmt;

/// Widest element type the emitter can declare; bit depths above this
/// would silently truncate, so they are rejected here.
pub const MAX_DAC_BITS: u32 = 32;

/// Error codes for parameter validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterErrorCode {
    /// E001: frequency_hz is not a positive finite number
    InvalidFrequency,
    /// E002: samples_per_cycle is 0
    InvalidSamplesPerCycle,
    /// E003: dac_bits is 0 or above MAX_DAC_BITS
    InvalidDacBits,
    /// E004: amplitude is outside [0, 1] or not finite
    InvalidAmplitude,
}

impl ParameterErrorCode {
    /// Get the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFrequency => "E001",
            Self::InvalidSamplesPerCycle => "E002",
            Self::InvalidDacBits => "E003",
            Self::InvalidAmplitude => "E004",
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::InvalidFrequency => {
                "Set frequency_hz to a positive finite value, e.g. 50.0 for a 50 Hz waveform."
            }
            Self::InvalidSamplesPerCycle => {
                "Set samples_per_cycle to a positive integer. 200 gives a smooth table at typical timer rates."
            }
            Self::InvalidDacBits => {
                "Set dac_bits between 1 and 32 (12 for a 0..4095 DAC). The emitted element type tops out at uint32_t."
            }
            Self::InvalidAmplitude => {
                "Set amplitude between 0.0 and 1.0, where 1.0 uses the DAC's full swing."
            }
        }
    }
}

impl fmt::Display for ParameterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single invalid parameter, with the field it belongs to.
#[derive(Debug, Clone)]
pub struct ParameterError {
    /// The error code for programmatic handling.
    pub code: ParameterErrorCode,
    /// The parameter field that failed validation.
    pub field: &'static str,
    /// The error message.
    pub message: String,
}

impl ParameterError {
    pub fn new(code: ParameterErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        self.code.guidance()
    }

    /// Format the error with guidance appended, for user-facing reports.
    pub fn detailed_message(&self) -> String {
        format!(
            "[{}] {}: {}\n  Guidance: {}",
            self.code.code(),
            self.field,
            self.message,
            self.guidance()
        )
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.code(), self.field, self.message)
    }
}

impl std::error::Error for ParameterError {}

/// Result of validating a full parameter set.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether every parameter passed.
    pub valid: bool,
    /// One entry per failing field (empty if valid).
    pub errors: Vec<ParameterError>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<ParameterError>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

/// Validate every parameter, collecting an error per failing field.
///
/// The checks mirror the generator's preconditions exactly; a parameter
/// set that passes here cannot fail inside [`crate::generator::generate`].
pub fn validate_parameters(params: &WaveformParameters) -> ValidationResult {
    let mut errors = Vec::new();

    if !(params.frequency_hz.is_finite() && params.frequency_hz > 0.0) {
        errors.push(ParameterError::new(
            ParameterErrorCode::InvalidFrequency,
            "frequency_hz",
            format!(
                "frequency_hz must be > 0 and finite, got {}",
                params.frequency_hz
            ),
        ));
    }

    if params.samples_per_cycle == 0 {
        errors.push(ParameterError::new(
            ParameterErrorCode::InvalidSamplesPerCycle,
            "samples_per_cycle",
            "samples_per_cycle must be > 0".to_string(),
        ));
    }

    if params.dac_bits == 0 || params.dac_bits > MAX_DAC_BITS {
        errors.push(ParameterError::new(
            ParameterErrorCode::InvalidDacBits,
            "dac_bits",
            format!(
                "dac_bits must be between 1 and {}, got {}",
                MAX_DAC_BITS, params.dac_bits
            ),
        ));
    }

    if !(params.amplitude.is_finite() && (0.0..=1.0).contains(&params.amplitude)) {
        errors.push(ParameterError::new(
            ParameterErrorCode::InvalidAmplitude,
            "amplitude",
            format!(
                "amplitude must be within [0, 1], got {}",
                params.amplitude
            ),
        ));
    }

    if errors.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::failure(errors)
    }
}

/// Validate and return the first failure, for callers that abort on error.
pub fn ensure_valid(params: &WaveformParameters) -> Result<(), ParameterError> {
    let result = validate_parameters(params);
    match result.errors.into_iter().next() {
        None => Ok(()),
        Some(first) => Err(first),
    }
}
