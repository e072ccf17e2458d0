use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use grapher::config::{DEFAULT_OUTPUT_FILE, DEFAULT_TIME_FILE};
use grapher::signal::{self, SignalKind, SignalParams};

/// Write a sampled waveform to a time file and an output file, one value per
/// line, ready for `grapher`.
#[derive(Debug, Parser)]
#[command(name = "generate_signal", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Waveform: sine, square, triangle or sawtooth (any case)
    signal: SignalKind,
    /// Peak amplitude
    amplitude: f64,
    /// Frequency in Hz
    frequency: f64,
    /// Duration in seconds
    duration: f64,
    /// Samples per second
    sample_rate: f64,

    /// Where to write the sample times
    #[arg(long, default_value = DEFAULT_TIME_FILE)]
    time_file: PathBuf,
    /// Where to write the sample values
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = SignalParams {
        amplitude: cli.amplitude,
        frequency: cli.frequency,
        duration: cli.duration,
        sample_rate: cli.sample_rate,
    };

    println!("Generating {} signal...", cli.signal);
    let sig = signal::generate(cli.signal, &params)?;

    signal::write_sequence(&cli.time_file, &sig.time)
        .with_context(|| format!("writing {}", cli.time_file.display()))?;
    signal::write_sequence(&cli.output_file, &sig.output)
        .with_context(|| format!("writing {}", cli.output_file.display()))?;

    log::info!(
        "Wrote {} samples to {} and {}",
        sig.time.len(),
        cli.time_file.display(),
        cli.output_file.display()
    );
    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_arguments_with_defaults() {
        let cli = Cli::try_parse_from(["generate_signal", "SQUARE", "-1", "2", "0.5", "100"])
            .unwrap();
        assert_eq!(cli.signal, SignalKind::Square);
        assert_eq!(cli.amplitude, -1.0);
        assert_eq!(cli.frequency, 2.0);
        assert_eq!(cli.duration, 0.5);
        assert_eq!(cli.sample_rate, 100.0);
        assert_eq!(cli.time_file, PathBuf::from(DEFAULT_TIME_FILE));
        assert_eq!(cli.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn output_paths_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "generate_signal",
            "sine",
            "1",
            "1",
            "1",
            "10",
            "--time-file",
            "t.txt",
            "--output-file",
            "y.txt",
        ])
        .unwrap();
        assert_eq!(cli.time_file, PathBuf::from("t.txt"));
        assert_eq!(cli.output_file, PathBuf::from("y.txt"));
    }

    #[test]
    fn rejects_unknown_signal_and_missing_arguments() {
        assert!(Cli::try_parse_from(["generate_signal", "noise", "1", "1", "1", "10"]).is_err());
        assert!(Cli::try_parse_from(["generate_signal", "sine", "1", "1"]).is_err());
    }
}
