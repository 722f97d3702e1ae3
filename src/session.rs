//! One recorder run: configuration, encode, decode and verification

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    channel::{ChannelRegistry, SortedChannels},
    codec::encode_value,
    decoder::{self, DecodedBlock},
    encoder,
    error::{ConfigError, Error, Result},
    schedule,
};

/// Raw run configuration as handed over by the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecorderConfig {
    pub start_time: u32,
    pub duration: u32,
    /// `(id, frequency)` pairs
    pub channels: Vec<(u32, u32)>,
    pub output: Option<PathBuf>,
}

/// A validated run. The channel set is sorted once here and only borrowed afterwards.
#[derive(Debug)]
pub struct Session {
    start_time: u32,
    duration: u32,
    channels: SortedChannels,
    path: PathBuf,
}

impl Session {
    pub fn new(config: RecorderConfig) -> Result<Self> {
        let mut registry = ChannelRegistry::new();
        for (id, frequency) in config.channels {
            registry.add(id, frequency)?;
        }
        let path = config.output.ok_or(ConfigError::MissingPath)?;
        if registry.is_empty() {
            return Err(ConfigError::NoChannels.into());
        }
        if config.duration == 0 {
            return Err(ConfigError::ZeroDuration.into());
        }
        if config.start_time.checked_add(config.duration).is_none() {
            return Err(ConfigError::TickOverflow {
                start: config.start_time,
                duration: config.duration,
            }
            .into());
        }
        Ok(Self {
            start_time: config.start_time,
            duration: config.duration,
            channels: registry.sort(),
            path,
        })
    }

    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn channels(&self) -> &SortedChannels {
        &self.channels
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the block file, returning its block length
    pub fn encode(&self) -> Result<i32> {
        encoder::encode_file(&self.path, self.start_time, self.duration, &self.channels)
    }

    /// Read the block file back
    pub fn decode(&self) -> Result<DecodedBlock> {
        decoder::decode_file(&self.path, &self.channels)
    }

    /// Check decoded samples against what this run should have produced
    pub fn verify(&self, block: &DecodedBlock) -> Result<()> {
        for (chan, out) in self.channels.iter().zip(&block.channels) {
            let expected = schedule::sample_count(self.start_time, self.duration, chan.divisor);
            if out.samples.len() as u64 != expected {
                return Err(Error::CountMismatch {
                    id: chan.id,
                    expected: expected as usize,
                    actual: out.samples.len(),
                });
            }
            let ticks = (self.start_time..self.start_time + self.duration)
                .filter(|t| schedule::emits(*t, chan.divisor));
            for (index, (tick, actual)) in ticks.zip(&out.samples).enumerate() {
                let expected = encode_value(chan.id, tick, chan.divisor);
                if *actual != expected {
                    return Err(Error::Mismatch {
                        id: chan.id,
                        index,
                        expected,
                        actual: *actual,
                    });
                }
            }
        }
        Ok(())
    }

    /// Encode, decode and verify in sequence
    pub fn run(&self) -> Result<DecodedBlock> {
        let block_len = self.encode()?;
        let block = self.decode()?;
        self.verify(&block)?;
        info!(
            block_len,
            samples = block.total_samples(),
            "Round trip verified"
        );
        Ok(block)
    }
}
