//! The emission schedule shared by the encoder and the decoder.
//!
//! Nothing in a block says which channel a sample belongs to, the schedule is
//! the only addressing there is. A channel emits on every tick its divisor
//! divides, and within a tick channels emit in registry order. Tick 0 is
//! divisible by everything, so every channel emits there.

use crate::channel::{ChannelDescriptor, SortedChannels};

pub fn emits(tick: u32, divisor: u32) -> bool {
    tick % divisor == 0
}

/// Channels that emit on `tick`, in the order their samples appear
pub fn emitting(
    channels: &SortedChannels,
    tick: u32,
) -> impl Iterator<Item = &ChannelDescriptor> + '_ {
    channels.iter().filter(move |c| emits(tick, c.divisor))
}

/// Number of ticks in `[start, start + duration)` a channel with `divisor` emits on
pub fn sample_count(start: u32, duration: u32, divisor: u32) -> u64 {
    let divisor = divisor as u64;
    let start = start as u64;
    let end = start + duration as u64;
    // Multiples of divisor below n: ceil(n / divisor)
    let below = |n: u64| (n + divisor - 1) / divisor;
    below(end) - below(start)
}

/// Payload bytes a full run over `[start, start + duration)` produces
pub fn block_size(channels: &SortedChannels, start: u32, duration: u32) -> u64 {
    channels
        .iter()
        .map(|c| sample_count(start, duration, c.divisor) * crate::SAMPLE_SIZE as u64)
        .sum()
}
