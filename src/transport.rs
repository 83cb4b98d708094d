use crate::clock::AudioClock;
use crate::error::{ClockError, Result};
use crate::time::{
    bar_start_pulse, samples_to_pulse, Pulse, SampleCount, SampleRate, Tempo, TimeSignature,
};
use log::{info, warn};
use std::sync::{Arc, Mutex};

/// Owns the clock for one offline render run and is passed down the render
/// call chain in place of process-wide state.
#[derive(Debug, Default)]
pub struct TransportContext {
    clock: Option<AudioClock>,
}

impl TransportContext {
    /// An empty context; call [`initialize`](Self::initialize) before stepping
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh clock at frame 0, stopped.
    ///
    /// A clock that is still live is discarded.
    pub fn initialize(&mut self) -> &mut AudioClock {
        if let Some(previous) = &self.clock {
            warn!(
                "Transport clock re-initialized while live at frame {}",
                previous.current_frame()
            );
        }
        info!("Transport clock initialized");
        self.clock.insert(AudioClock::new())
    }

    pub fn clock(&self) -> Option<&AudioClock> {
        self.clock.as_ref()
    }

    pub fn clock_mut(&mut self) -> Option<&mut AudioClock> {
        self.clock.as_mut()
    }

    pub fn is_live(&self) -> bool {
        self.clock.is_some()
    }

    /// Drops the live clock, if any
    pub fn release(&mut self) {
        if let Some(clock) = self.clock.take() {
            info!(
                "Transport clock released at frame {}",
                clock.current_frame()
            );
        }
    }

    pub fn advance(&mut self, block_size: impl Into<SampleCount>) -> Result<()> {
        self.live_mut()?.advance(block_size);
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        self.live_mut()?.stop();
        Ok(())
    }

    /// Snapshot of the transport as a hosted plugin would query it
    pub fn info(
        &self,
        tempo: Tempo,
        sample_rate: SampleRate,
        time_signature: TimeSignature,
    ) -> Result<TransportInfo> {
        let clock = self.clock.as_ref().ok_or(ClockError::Uninitialized)?;
        Ok(TransportInfo::capture(
            clock,
            tempo,
            sample_rate,
            time_signature,
        ))
    }

    fn live_mut(&mut self) -> Result<&mut AudioClock> {
        self.clock.as_mut().ok_or(ClockError::Uninitialized)
    }
}

/// Host transport state presented to a plugin for one block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportInfo {
    pub sample_position: SampleCount,
    pub ppq_position: Pulse,
    pub bar_start_ppq: Pulse,
    pub tempo: Tempo,
    pub sample_rate: SampleRate,
    pub time_signature: TimeSignature,
    pub is_playing: bool,
    pub transport_changed: bool,
}

impl TransportInfo {
    pub fn capture(
        clock: &AudioClock,
        tempo: Tempo,
        sample_rate: SampleRate,
        time_signature: TimeSignature,
    ) -> Self {
        let sample_position = clock.current_frame();
        let ppq_position = samples_to_pulse(sample_position, tempo, sample_rate);
        Self {
            sample_position,
            ppq_position,
            bar_start_ppq: bar_start_pulse(ppq_position, time_signature),
            tempo,
            sample_rate,
            time_signature,
            is_playing: clock.is_playing(),
            transport_changed: clock.transport_changed(),
        }
    }
}

/// Transport context guarded for render passes driven from several threads
pub type SharedTransport = Arc<Mutex<TransportContext>>;

pub fn create_shared_transport() -> SharedTransport {
    Arc::new(Mutex::new(TransportContext::new()))
}
