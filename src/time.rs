//! Musical and sample-domain time values
//!
//! Tempo, sample rate, sample counts and pulse positions are kept as distinct
//! types so they cannot be swapped at a call site. The conversions between
//! sample position and pulse position are stateless.

use crate::error::{ClockError, Result};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Seconds per minute, used to turn BPM into samples per beat
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Musical position numbering starts at the first beat of the first bar
pub const FIRST_PULSE: f64 = 1.0;

/// Tempo in beats (quarter notes) per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tempo(f64);

impl Tempo {
    /// Wraps a BPM value without checking it
    pub const fn from_bpm(bpm: f64) -> Self {
        Tempo(bpm)
    }

    /// Wraps a BPM value, rejecting zero, negative and non-finite tempos
    pub fn try_from_bpm(bpm: f64) -> Result<Self> {
        if bpm.is_finite() && bpm > 0.0 {
            Ok(Tempo(bpm))
        } else {
            Err(ClockError::InvalidTempo(bpm))
        }
    }

    pub fn bpm(self) -> f64 {
        self.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo(120.0)
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.0)
    }
}

/// Sample rate in samples per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleRate(f64);

impl SampleRate {
    pub const fn from_hz(hz: f64) -> Self {
        SampleRate(hz)
    }

    pub fn try_from_hz(hz: f64) -> Result<Self> {
        if hz.is_finite() && hz > 0.0 {
            Ok(SampleRate(hz))
        } else {
            Err(ClockError::InvalidSampleRate(hz))
        }
    }

    pub fn hz(self) -> f64 {
        self.0
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        SampleRate(44_100.0)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Absolute or relative number of samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleCount(u64);

impl SampleCount {
    pub const ZERO: SampleCount = SampleCount(0);

    pub const fn new(samples: u64) -> Self {
        SampleCount(samples)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for SampleCount {
    fn from(samples: u64) -> Self {
        SampleCount(samples)
    }
}

impl From<SampleCount> for u64 {
    fn from(samples: SampleCount) -> Self {
        samples.0
    }
}

impl Add for SampleCount {
    type Output = SampleCount;

    fn add(self, rhs: SampleCount) -> SampleCount {
        SampleCount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for SampleCount {
    fn add_assign(&mut self, rhs: SampleCount) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Musical position in quarter-note pulses, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pulse(f64);

impl Pulse {
    pub const FIRST: Pulse = Pulse(FIRST_PULSE);

    pub const fn new(ppq: f64) -> Self {
        Pulse(ppq)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Time signature as numerator over denominator, 4/4 by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    numerator: u32,
    denominator: u32,
}

impl TimeSignature {
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(ClockError::InvalidTimeSignature(format!(
                "{}/{} has a zero term",
                numerator, denominator
            )));
        }
        Ok(TimeSignature {
            numerator,
            denominator,
        })
    }

    pub fn numerator(self) -> u32 {
        self.numerator
    }

    pub fn denominator(self) -> u32 {
        self.denominator
    }

    /// Bar length expressed in quarter-note pulses
    pub fn quarters_per_bar(self) -> f64 {
        f64::from(self.numerator) * 4.0 / f64::from(self.denominator)
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature {
            numerator: 4,
            denominator: 4,
        }
    }
}

impl FromStr for TimeSignature {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        let (num, den) = s
            .split_once('/')
            .ok_or_else(|| ClockError::InvalidTimeSignature(format!("'{}' is not N/D", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| ClockError::InvalidTimeSignature(format!("'{}': {}", s, e)))
        };
        TimeSignature::new(parse(num)?, parse(den)?)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[inline]
pub fn samples_per_beat(tempo: Tempo, sample_rate: SampleRate) -> f64 {
    (SECONDS_PER_MINUTE / tempo.0) * sample_rate.0
}

/// Converts a sample position to a pulse position.
///
/// Sample 0 is pulse 1. A non-positive tempo is not checked and yields a
/// meaningless pulse; use [`try_samples_to_pulse`] to reject it.
pub fn samples_to_pulse(samples: SampleCount, tempo: Tempo, sample_rate: SampleRate) -> Pulse {
    Pulse(samples.0 as f64 / samples_per_beat(tempo, sample_rate) + FIRST_PULSE)
}

/// Converts a pulse position back to a sample position, truncating toward zero.
///
/// Pulses before 1 clamp to sample 0.
pub fn pulse_to_samples(pulse: Pulse, tempo: Tempo, sample_rate: SampleRate) -> SampleCount {
    SampleCount((samples_per_beat(tempo, sample_rate) * (pulse.0 - FIRST_PULSE)) as u64)
}

pub fn try_samples_to_pulse(
    samples: SampleCount,
    tempo: Tempo,
    sample_rate: SampleRate,
) -> Result<Pulse> {
    validate(tempo, sample_rate)?;
    Ok(samples_to_pulse(samples, tempo, sample_rate))
}

pub fn try_pulse_to_samples(
    pulse: Pulse,
    tempo: Tempo,
    sample_rate: SampleRate,
) -> Result<SampleCount> {
    validate(tempo, sample_rate)?;
    Ok(pulse_to_samples(pulse, tempo, sample_rate))
}

fn validate(tempo: Tempo, sample_rate: SampleRate) -> Result<()> {
    Tempo::try_from_bpm(tempo.0)?;
    SampleRate::try_from_hz(sample_rate.0)?;
    Ok(())
}

/// Pulse of the downbeat of the bar containing `pulse`
pub fn bar_start_pulse(pulse: Pulse, signature: TimeSignature) -> Pulse {
    let bar_length = signature.quarters_per_bar();
    let bars_elapsed = ((pulse.0 - FIRST_PULSE) / bar_length).floor();
    Pulse(bars_elapsed * bar_length + FIRST_PULSE)
}
