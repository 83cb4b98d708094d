// clock.rs

use crate::time::SampleCount;
use log::{debug, trace};

/// Offline transport clock, stepped once per rendered block.
///
/// Tracks how many samples have been rendered, whether the simulated
/// transport is playing, and whether the transport state changed on the
/// most recent step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioClock {
    current_frame: SampleCount,
    is_playing: bool,
    transport_changed: bool,
}

impl AudioClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps the clock over one block of `block_size` samples.
    ///
    /// The first block, and the first block after [`stop`](Self::stop), is a
    /// (re)start and raises `transport_changed`; every other block clears it.
    /// The transition is decided on the position before this block is added.
    pub fn advance(&mut self, block_size: impl Into<SampleCount>) {
        let block_size = block_size.into();

        if self.current_frame.is_zero() || !self.is_playing {
            debug!("Transport started at frame {}", self.current_frame);
            self.transport_changed = true;
            self.is_playing = true;
        } else {
            self.transport_changed = false;
        }

        self.current_frame += block_size;
        trace!(
            "Advanced {} samples to frame {}",
            block_size,
            self.current_frame
        );
    }

    /// Halts the transport; the position is kept so a resume continues from it
    pub fn stop(&mut self) {
        debug!("Transport stopped at frame {}", self.current_frame);
        self.is_playing = false;
        self.transport_changed = true;
    }

    pub fn current_frame(&self) -> SampleCount {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn transport_changed(&self) -> bool {
        self.transport_changed
    }
}
