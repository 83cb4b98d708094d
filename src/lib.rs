pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod time;
pub mod transport;
pub mod ui;

pub use clock::AudioClock;
pub use error::{ClockError, Result};
pub use time::{
    pulse_to_samples, samples_per_beat, samples_to_pulse, Pulse, SampleCount, SampleRate, Tempo,
    TimeSignature,
};
pub use transport::{create_shared_transport, SharedTransport, TransportContext, TransportInfo};
