use crate::config::Settings;
use crate::error::Result;
use crate::time::{SampleRate, Tempo, TimeSignature};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tempo in beats per minute
    #[arg(short, long)]
    pub tempo: Option<f64>,

    /// Sample rate in Hz
    #[arg(short = 'r', long)]
    pub sample_rate: Option<f64>,

    /// Samples per rendered block
    #[arg(short, long)]
    pub block_size: Option<u64>,

    /// Total samples to render
    #[arg(short, long)]
    pub length: Option<u64>,

    /// Stop and resume the transport every N blocks
    #[arg(long)]
    pub stop_every: Option<u64>,

    /// Time signature, e.g. 3/4
    #[arg(long)]
    pub time_signature: Option<TimeSignature>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Applies command-line values over loaded settings
    pub fn apply(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(bpm) = self.tempo {
            settings.tempo = Tempo::try_from_bpm(bpm)?;
        }
        if let Some(hz) = self.sample_rate {
            settings.sample_rate = SampleRate::try_from_hz(hz)?;
        }
        if let Some(block_size) = self.block_size {
            settings.block_size = block_size;
        }
        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(every) = self.stop_every {
            settings.stop_every = if every == 0 { None } else { Some(every) };
        }
        if let Some(signature) = self.time_signature {
            settings.time_signature = signature;
        }
        settings.validate()?;
        Ok(settings)
    }
}
