use std::f64::consts::PI;
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::SignalError;

// ---------------------------------------------------------------------------
// Waveforms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Sine,
        SignalKind::Square,
        SignalKind::Triangle,
        SignalKind::Sawtooth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Sine => "sine",
            SignalKind::Square => "square",
            SignalKind::Triangle => "triangle",
            SignalKind::Sawtooth => "sawtooth",
        }
    }

    /// Value at time `t` for a unit-amplitude wave of `frequency` Hz.
    fn unit_value(self, frequency: f64, t: f64) -> f64 {
        let phase = 2.0 * PI * frequency * t;
        match self {
            SignalKind::Sine => phase.sin(),
            SignalKind::Square => sign(phase.sin()),
            // Peaks at ±π/2.
            SignalKind::Triangle => phase.sin().asin(),
            SignalKind::Sawtooth => {
                let cycles = frequency * t;
                2.0 * (cycles - (cycles + 0.5).floor())
            }
        }
    }
}

/// Like `f64::signum`, but zero maps to zero.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SignalError::Unknown(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Largest sample count `generate` will allocate.
pub const MAX_SAMPLES: usize = 100_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    pub amplitude: f64,
    /// Hz.
    pub frequency: f64,
    /// Seconds.
    pub duration: f64,
    /// Samples per second.
    pub sample_rate: f64,
}

impl SignalParams {
    /// `duration * sample_rate`, truncated.
    pub fn sample_count(&self) -> usize {
        (self.duration * self.sample_rate) as usize
    }

    fn validate(&self) -> Result<(), SignalError> {
        let all_finite = [self.amplitude, self.frequency, self.duration, self.sample_rate]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(SignalError::InvalidParams("values must be finite".into()));
        }
        if self.sample_rate <= 0.0 {
            return Err(SignalError::InvalidParams(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.duration < 0.0 {
            return Err(SignalError::InvalidParams(format!(
                "duration must not be negative, got {}",
                self.duration
            )));
        }
        let samples = self.duration * self.sample_rate;
        if samples > MAX_SAMPLES as f64 {
            return Err(SignalError::InvalidParams(format!(
                "{samples} samples requested, at most {MAX_SAMPLES} allowed"
            )));
        }
        Ok(())
    }
}

/// Sampled waveform: `time[i]` pairs with `output[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub time: Vec<f64>,
    pub output: Vec<f64>,
}

/// Sample `kind` at `t_i = i / sample_rate` for `i < sample_count()`.
pub fn generate(kind: SignalKind, params: &SignalParams) -> Result<Signal, SignalError> {
    params.validate()?;

    let n = params.sample_count();
    let time: Vec<f64> = (0..n).map(|i| i as f64 / params.sample_rate).collect();
    let output = time
        .iter()
        .map(|&t| params.amplitude * kind.unit_value(params.frequency, t))
        .collect();

    log::debug!("Generated {n} samples of {kind} signal");
    Ok(Signal { time, output })
}

/// Replace `path` with one value per line, formatted so that it reads back
/// bit-for-bit.
pub fn write_sequence(path: &Path, values: &[f64]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for v in values {
        writeln!(writer, "{v}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(frequency: f64, duration: f64, sample_rate: f64) -> SignalParams {
        SignalParams {
            amplitude: 2.0,
            frequency,
            duration,
            sample_rate,
        }
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Sine".parse::<SignalKind>(), Ok(SignalKind::Sine));
        assert_eq!("SAWTOOTH".parse::<SignalKind>(), Ok(SignalKind::Sawtooth));
        assert_eq!(
            "noise".parse::<SignalKind>(),
            Err(SignalError::Unknown("noise".into()))
        );
    }

    #[test]
    fn sample_count_truncates() {
        let sig = generate(SignalKind::Sine, &params(1.0, 0.0105, 1000.0)).unwrap();
        assert_eq!(sig.time.len(), 10);
        assert_eq!(sig.output.len(), 10);
        assert_eq!(sig.time[3], 3.0 / 1000.0);
    }

    #[test]
    fn sine_quarter_period_hits_amplitude() {
        let sig = generate(SignalKind::Sine, &params(1.0, 1.0, 4.0)).unwrap();
        assert_eq!(sig.output[0], 0.0);
        assert!((sig.output[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn square_is_zero_at_origin() {
        let sig = generate(SignalKind::Square, &params(1.0, 1.0, 8.0)).unwrap();
        assert_eq!(sig.output[0], 0.0);
        assert_eq!(sig.output[1], 2.0);
        assert_eq!(sig.output[5], -2.0);
    }

    #[test]
    fn triangle_peaks_at_half_pi() {
        let sig = generate(SignalKind::Triangle, &params(1.0, 1.0, 4.0)).unwrap();
        assert!((sig.output[1] - 2.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn sawtooth_ramps_and_wraps() {
        let sig = generate(SignalKind::Sawtooth, &params(1.0, 1.0, 4.0)).unwrap();
        assert_eq!(sig.output, vec![0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn rejects_bad_sample_rate() {
        let err = generate(SignalKind::Sine, &params(1.0, 1.0, 0.0)).unwrap_err();
        assert!(matches!(err, SignalError::InvalidParams(_)));
    }

    #[test]
    fn rejects_oversized_sample_count() {
        let err = generate(SignalKind::Sine, &params(1.0, 1e30, 1.0)).unwrap_err();
        assert!(matches!(err, SignalError::InvalidParams(_)), "got {err:?}");

        let err = generate(SignalKind::Sine, &params(1.0, 1.0, 1e300)).unwrap_err();
        assert!(matches!(err, SignalError::InvalidParams(_)), "got {err:?}");
    }

    #[test]
    fn zero_duration_is_empty() {
        let sig = generate(SignalKind::Sine, &params(1.0, 0.0, 100.0)).unwrap();
        assert!(sig.time.is_empty());
    }
}
