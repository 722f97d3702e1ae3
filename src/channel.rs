//! Channel registration and the ordering that drives sample interleaving

use std::{cmp::Ordering, ops::Deref};

use tracing::{debug, warn};

use crate::{
    error::{ConfigError, Result},
    frequency, BASE_FREQUENCY, MAX_CHANNELS,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChannelDescriptor {
    pub id: u32,
    /// Ticks between consecutive samples
    pub divisor: u32,
}

impl ChannelDescriptor {
    pub fn new(id: u32, divisor: u32) -> Self {
        Self { id, divisor }
    }

    pub fn frequency(&self) -> u32 {
        frequency::frequency(self.divisor)
    }
}

// Fastest channels first, ties broken by id. Ids are unique within a registry
// so this is a total order over registered channels.
impl Ord for ChannelDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.divisor.cmp(&other.divisor) {
            Ordering::Equal => self.id.cmp(&other.id),
            ord => ord,
        }
    }
}

impl PartialOrd for ChannelDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Channels as they are being configured
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Vec<ChannelDescriptor>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: u32, frequency: u32) -> Result<()> {
        if self.channels.len() >= MAX_CHANNELS {
            return Err(ConfigError::TooManyChannels { max: MAX_CHANNELS }.into());
        }
        if frequency > BASE_FREQUENCY {
            return Err(ConfigError::FrequencyTooHigh {
                id,
                frequency,
                base: BASE_FREQUENCY,
            }
            .into());
        }
        if frequency == 0 {
            return Err(ConfigError::ZeroFrequency { id }.into());
        }
        if self.channels.iter().any(|c| c.id == id) {
            return Err(ConfigError::DuplicateChannel { id }.into());
        }
        let divisor = frequency::divisor(frequency);
        if !frequency::is_supported(frequency) {
            warn!(
                id,
                frequency,
                effective = frequency::frequency(divisor),
                "Channel frequency is not in the frequency table"
            );
        }
        self.channels.push(ChannelDescriptor::new(id, divisor));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Freeze the registry in emission order
    pub fn sort(mut self) -> SortedChannels {
        self.channels.sort();
        for c in &self.channels {
            debug!(id = c.id, divisor = c.divisor, "Channel registered");
        }
        SortedChannels(self.channels)
    }
}

/// Read-only channel list in emission order, shared by encoder and decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedChannels(Vec<ChannelDescriptor>);

impl SortedChannels {
    /// Bytes the whole channel set emits over one second of ticks
    pub fn one_second_size(&self) -> usize {
        self.0
            .iter()
            .map(|c| c.frequency() as usize * crate::SAMPLE_SIZE)
            .sum()
    }
}

impl Deref for SortedChannels {
    type Target = [ChannelDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
