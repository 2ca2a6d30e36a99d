//! # dacgen
//!
//! Command-line generator for quantized sine lookup tables driving a DAC
//! from a hardware timer. Emits the table as a C source file ready to
//! compile into firmware.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dac_table::{
    generate, validate_parameters, write_c_source, CSourceOptions, DacTable, TimerClock,
    WaveformParameters,
};
use std::path::PathBuf;

/// CLI tool for generating DAC sine lookup tables
#[derive(Parser)]
#[command(name = "dacgen")]
#[command(about = "Generates quantized sine lookup tables for a timer-driven DAC")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a table and write it as a C source file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "dac_buffer_values.c")]
        output: PathBuf,

        /// Waveform frequency in Hz
        #[arg(short, long, default_value = "50.0")]
        frequency: f64,

        /// Number of samples per waveform cycle
        #[arg(short, long, default_value = "200")]
        samples: u32,

        /// DAC resolution in bits
        #[arg(short, long, default_value = "12")]
        bits: u32,

        /// Normalized amplitude (0.0 to 1.0)
        #[arg(short, long, default_value = "1.0")]
        amplitude: f64,

        /// Timer clock rate in Hz used for the PRD recommendation
        #[arg(long, default_value = "200000000")]
        timer_clock: f64,

        /// Name of the emitted array
        #[arg(long, default_value = "dac_buffer")]
        array_name: String,
    },

    /// Compute and print the table summary without writing a file
    Info {
        /// Waveform frequency in Hz
        #[arg(short, long, default_value = "50.0")]
        frequency: f64,

        /// Number of samples per waveform cycle
        #[arg(short, long, default_value = "200")]
        samples: u32,

        /// DAC resolution in bits
        #[arg(short, long, default_value = "12")]
        bits: u32,

        /// Normalized amplitude (0.0 to 1.0)
        #[arg(short, long, default_value = "1.0")]
        amplitude: f64,

        /// Timer clock rate in Hz used for the PRD recommendation
        #[arg(long, default_value = "200000000")]
        timer_clock: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            frequency,
            samples,
            bits,
            amplitude,
            timer_clock,
            array_name,
        } => {
            let table = build_table(frequency, samples, bits, amplitude)?;
            let clock = build_clock(timer_clock)?;
            print_summary(&table, &clock);

            let options = CSourceOptions::new(array_name, clock);
            write_c_source(&output, &table, &options)?;
            println!();
            println!("Results saved to '{}'", output.display());
            Ok(())
        }

        Commands::Info {
            frequency,
            samples,
            bits,
            amplitude,
            timer_clock,
        } => {
            let table = build_table(frequency, samples, bits, amplitude)?;
            let clock = build_clock(timer_clock)?;
            print_summary(&table, &clock);
            Ok(())
        }
    }
}

/// Validate the parameters and generate the table.
///
/// Every failing field is reported before aborting, so a caller fixing
/// their invocation sees all problems at once.
fn build_table(frequency: f64, samples: u32, bits: u32, amplitude: f64) -> Result<DacTable> {
    let params = WaveformParameters::new(frequency, samples, bits, amplitude);

    let result = validate_parameters(&params);
    if !result.valid {
        for error in &result.errors {
            eprintln!("{}", error.detailed_message());
        }
        bail!("invalid parameters: {} field(s) rejected", result.errors.len());
    }

    Ok(generate(&params)?)
}

fn build_clock(timer_clock: f64) -> Result<TimerClock> {
    if !(timer_clock.is_finite() && timer_clock > 0.0) {
        bail!("timer clock must be a positive rate in Hz, got {}", timer_clock);
    }
    Ok(TimerClock::new(timer_clock))
}

/// Print the calculated results, mirroring the emitted header.
fn print_summary(table: &DacTable, clock: &TimerClock) {
    let params = &table.params;

    println!("--- Calculated Results ---");
    println!("Waveform frequency: {} Hz", params.frequency_hz);
    println!("Samples per cycle: {}", params.samples_per_cycle);
    println!(
        "DAC resolution: {} bits (values 0 to {})",
        params.dac_bits,
        params.max_dac_value()
    );
    println!("Normalized amplitude (0-1): {}", params.amplitude);
    println!(
        "Required sampling frequency (for timer): {:.2} Hz",
        table.sample_rate_hz
    );
    println!(
        "Recommended timer PRD value (at {:.0} MHz clock): {}",
        clock.clock_hz() / 1e6,
        clock.period_register(table.sample_rate_hz)
    );
    println!("Minimum generated value: {}", table.min_sample());
    println!("Maximum generated value: {}", table.max_sample());
}
