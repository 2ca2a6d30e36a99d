//! C source emission for generated tables.
//!
//! Renders a [`DacTable`] as a compilable C translation unit: a comment
//! header recording every generation parameter, one `#include`, and a
//! single `const` array sized exactly to the table. The emitter performs
//! no validation; it trusts the table handed to it.

use crate::timer::TimerClock;
use crate::types::DacTable;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

/// Values per line in the emitted array body.
const VALUES_PER_LINE: usize = 10;

/// Options controlling the emitted artifact.
#[derive(Debug, Clone)]
pub struct CSourceOptions {
    /// Name of the emitted array.
    pub array_name: String,
    /// Timer clock used to derive the PRD value in the header.
    pub timer_clock: TimerClock,
}

impl CSourceOptions {
    pub fn new(array_name: impl Into<String>, timer_clock: TimerClock) -> Self {
        Self {
            array_name: array_name.into(),
            timer_clock,
        }
    }
}

/// Render a table as C source, stamped with the current local time.
pub fn render_c_source(table: &DacTable, options: &CSourceOptions) -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_c_source_at(table, options, &now)
}

/// Render a table as C source with an explicit generation timestamp.
///
/// Deterministic: identical inputs produce identical text.
pub fn render_c_source_at(table: &DacTable, options: &CSourceOptions, generated_at: &str) -> String {
    let params = &table.params;
    let max_dac_value = params.max_dac_value();
    let prd = options.timer_clock.period_register(table.sample_rate_hz);

    let mut out = String::new();

    out.push_str("/*\n");
    out.push_str(&format!(" * Generated by dacgen on {}\n", generated_at));
    out.push_str(&format!(
        " * Waveform Frequency: {} Hz\n",
        params.frequency_hz
    ));
    out.push_str(&format!(
        " * Samples per Cycle: {}\n",
        params.samples_per_cycle
    ));
    out.push_str(&format!(
        " * DAC Resolution: {} bits (values 0 to {})\n",
        params.dac_bits, max_dac_value
    ));
    out.push_str(&format!(
        " * Waveform Amplitude (normalized 0-1): {}\n",
        params.amplitude
    ));
    out.push_str(&format!(
        " * Required Sampling Frequency (for timer): {:.2} Hz\n",
        table.sample_rate_hz
    ));
    out.push_str(&format!(" * Recommended Timer PRD Value: {}\n", prd));
    out.push_str(" */\n\n");

    out.push_str("#include <stdint.h>\n\n");
    out.push_str("// Values for the DAC output buffer\n");
    out.push_str(&format!(
        "const {} {}[{}] = {{\n",
        element_type(params.dac_bits),
        options.array_name,
        table.len()
    ));

    for (i, value) in table.samples.iter().enumerate() {
        out.push_str(&format!("    {},", value));
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out.push_str("\n};\n");

    out
}

/// Write a table as a C source file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// file cannot be written.
pub fn write_c_source(path: &Path, table: &DacTable, options: &CSourceOptions) -> Result<()> {
    let source = render_c_source(table, options);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create parent directories")?;
        }
    }
    fs::write(path, source)
        .with_context(|| format!("Failed to write C source to {}", path.display()))?;

    Ok(())
}

/// Smallest stdint type wide enough for the table's code range.
///
/// The reference script hard-coded uint16_t; widths are derived from the
/// bit depth here instead, with validation capping dac_bits at 32.
fn element_type(dac_bits: u32) -> &'static str {
    match dac_bits {
        0..=8 => "uint8_t",
        9..=16 => "uint16_t",
        _ => "uint32_t",
    }
}
