//! Offline render driver
//!
//! Steps a [`TransportContext`] through a render pass one block at a time, the
//! way a plugin processing loop would, and records what a hosted plugin sees
//! on each block.

use crate::config::Settings;
use crate::error::{ClockError, Result};
use crate::time::SampleCount;
use crate::transport::{TransportContext, TransportInfo};
use log::{debug, info};

/// One rendered block and the transport state reported for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedBlock {
    pub index: u64,
    pub block_start: SampleCount,
    pub block_size: u64,
    pub info: TransportInfo,
}

pub struct OfflineRender {
    settings: Settings,
    transport: TransportContext,
}

impl OfflineRender {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            transport: TransportContext::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Renders `total_samples` and returns every block's transport state
    pub fn run(&mut self, total_samples: u64) -> Result<Vec<RenderedBlock>> {
        let mut blocks = Vec::new();
        self.run_with(total_samples, |block| blocks.push(*block))?;
        Ok(blocks)
    }

    /// Renders `total_samples`, handing each block to `on_block`.
    ///
    /// The last block is shortened to end exactly on `total_samples`. The
    /// clock is stopped at the end of the pass and then released.
    pub fn run_with<F>(&mut self, total_samples: u64, mut on_block: F) -> Result<SampleCount>
    where
        F: FnMut(&RenderedBlock),
    {
        let block_size = self.settings.block_size;
        if block_size == 0 {
            return Err(ClockError::InvalidBlockSize);
        }

        info!(
            "Rendering {} samples in blocks of {} at {}, {}",
            total_samples, block_size, self.settings.tempo, self.settings.sample_rate
        );
        self.transport.initialize();

        let mut rendered = 0u64;
        let mut index = 0u64;
        while rendered < total_samples {
            if let Some(every) = self.settings.stop_every {
                if every > 0 && index > 0 && index % every == 0 {
                    debug!("Segment boundary at block {}", index);
                    self.transport.stop()?;
                }
            }

            let size = block_size.min(total_samples - rendered);
            let block_start = self.current_frame()?;
            self.transport.advance(size)?;

            let block = RenderedBlock {
                index,
                block_start,
                block_size: size,
                info: self.transport.info(
                    self.settings.tempo,
                    self.settings.sample_rate,
                    self.settings.time_signature,
                )?,
            };
            on_block(&block);

            rendered += size;
            index += 1;
        }

        self.transport.stop()?;
        let end = self.current_frame()?;
        self.transport.release();

        info!("Render finished after {} blocks at frame {}", index, end);
        Ok(end)
    }

    fn current_frame(&self) -> Result<SampleCount> {
        self.transport
            .clock()
            .map(|clock| clock.current_frame())
            .ok_or(ClockError::Uninitialized)
    }
}
