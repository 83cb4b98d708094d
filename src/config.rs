// config.rs

use crate::error::{ClockError, Result};
use crate::time::{SampleRate, Tempo, TimeSignature};
use ::config::{Environment, File};
use log::{debug, info};
use std::path::Path;

pub const DEFAULT_TEMPO: f64 = 120.0;
pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;
pub const DEFAULT_BLOCK_SIZE: u64 = 512;
/// Ten seconds at the default sample rate
pub const DEFAULT_LENGTH: u64 = 441_000;

const ENV_PREFIX: &str = "RENDERTRANSPORT";

/// Parameters of one offline render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tempo: Tempo,
    pub sample_rate: SampleRate,
    pub block_size: u64,
    pub length: u64,
    /// Stop the transport after this many blocks, then resume
    pub stop_every: Option<u64>,
    pub time_signature: TimeSignature,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tempo: Tempo::from_bpm(DEFAULT_TEMPO),
            sample_rate: SampleRate::from_hz(DEFAULT_SAMPLE_RATE),
            block_size: DEFAULT_BLOCK_SIZE,
            length: DEFAULT_LENGTH,
            stop_every: None,
            time_signature: TimeSignature::default(),
        }
    }
}

impl Settings {
    /// Loads settings from defaults, an optional file, then
    /// `RENDERTRANSPORT_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("tempo", DEFAULT_TEMPO)?
            .set_default("sample_rate", DEFAULT_SAMPLE_RATE)?
            .set_default("block_size", DEFAULT_BLOCK_SIZE as i64)?
            .set_default("length", DEFAULT_LENGTH as i64)?
            .set_default("stop_every", 0i64)?
            .set_default("time_signature", "4/4")?;

        if let Some(path) = path {
            info!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let raw = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let settings = Settings {
            tempo: Tempo::try_from_bpm(raw.get_float("tempo")?)?,
            sample_rate: SampleRate::try_from_hz(raw.get_float("sample_rate")?)?,
            block_size: non_negative(&raw, "block_size")?,
            length: non_negative(&raw, "length")?,
            stop_every: match non_negative(&raw, "stop_every")? {
                0 => None,
                blocks => Some(blocks),
            },
            time_signature: raw.get_string("time_signature")?.parse()?,
        };
        settings.validate()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        Tempo::try_from_bpm(self.tempo.bpm())?;
        SampleRate::try_from_hz(self.sample_rate.hz())?;
        if self.block_size == 0 {
            return Err(ClockError::InvalidBlockSize);
        }
        Ok(())
    }
}

fn non_negative(raw: &::config::Config, key: &str) -> Result<u64> {
    let value = raw.get_int(key)?;
    u64::try_from(value).map_err(|_| ClockError::Config(format!("{} must not be negative", key)))
}
