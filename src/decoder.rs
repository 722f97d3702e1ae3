//! Reads a block back into per-channel sample sequences.
//!
//! The header only carries the start tick and the payload length, so the
//! duration has to be estimated from the channel set: round the payload up to
//! whole seconds of the full channel set and walk that many ticks, stopping as
//! soon as the payload is used up.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::{
    channel::SortedChannels,
    error::{Error, Result, Section},
    header::BlockHeader,
    schedule, Sample, BASE_FREQUENCY, SAMPLE_SIZE,
};

/// Decoded samples of one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOutput {
    pub id: u32,
    pub frequency: u32,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub start_time: u32,
    pub block_length: i32,
    /// Ticks the decoder was prepared to walk, a whole number of seconds
    pub duration_estimate: u64,
    /// One entry per channel, in emission order
    pub channels: Vec<ChannelOutput>,
}

impl DecodedBlock {
    pub fn total_samples(&self) -> usize {
        self.channels.iter().map(|c| c.samples.len()).sum()
    }
}

/// Duration estimate in ticks for a payload of `block_length` bytes, rounded up to whole seconds
pub fn estimate_duration(block_length: i32, one_second_size: usize) -> u64 {
    if one_second_size == 0 {
        return 0;
    }
    let len = block_length.max(0) as u64;
    let size = one_second_size as u64;
    (len + size - 1) / size * BASE_FREQUENCY as u64
}

/// Most samples reserved up front per channel, buffers grow past this as needed
const MAX_PREALLOC: usize = 1 << 16;

/// Initial buffer size for a channel, bounded by what the header claims
fn buffer_capacity(duration: u64, divisor: u32, block_length: i32) -> usize {
    // One extra in case start isn't aligned to the divisor
    let scheduled = (duration / divisor as u64) as usize + 1;
    let in_payload = block_length.max(0) as usize / SAMPLE_SIZE;
    scheduled.min(in_payload).min(MAX_PREALLOC)
}

pub fn decode<R: Read>(input: &mut R, channels: &SortedChannels) -> Result<DecodedBlock> {
    let header = BlockHeader::read_from(input)?;
    if header.block_length < 0 || header.block_length as usize % SAMPLE_SIZE != 0 {
        return Err(Error::InvalidBlockLength(header.block_length));
    }
    let duration = estimate_duration(header.block_length, channels.one_second_size());
    debug!(
        start = header.start_time,
        block_length = header.block_length,
        duration,
        "Read block header"
    );

    let mut outputs: Vec<ChannelOutput> = channels
        .iter()
        .map(|c| ChannelOutput {
            id: c.id,
            frequency: c.frequency(),
            samples: Vec::with_capacity(buffer_capacity(
                duration,
                c.divisor,
                header.block_length,
            )),
        })
        .collect();

    // Ticks are 32 bits, don't walk past the end of the counter
    let start = header.start_time as u64;
    let end = (start + duration).min(u32::MAX as u64 + 1);
    let mut remaining = header.block_length;
    let mut word = [0u8; SAMPLE_SIZE];
    for tick in start..end {
        if remaining <= 0 {
            break;
        }
        let tick = tick as u32;
        for (chan, out) in channels.iter().zip(outputs.iter_mut()) {
            if remaining <= 0 {
                break;
            }
            if !schedule::emits(tick, chan.divisor) {
                continue;
            }
            input
                .read_exact(&mut word)
                .map_err(|e| Error::from_read(e, Section::Payload { remaining }))?;
            out.samples.push(Sample::from_ne_bytes(word));
            remaining -= SAMPLE_SIZE as i32;
        }
    }
    if remaining > 0 {
        warn!(
            remaining,
            "Tick range exhausted before the payload, channel set doesn't match the block"
        );
    }

    Ok(DecodedBlock {
        start_time: header.start_time,
        block_length: header.block_length,
        duration_estimate: duration,
        channels: outputs,
    })
}

pub fn decode_file<P: AsRef<Path>>(path: P, channels: &SortedChannels) -> Result<DecodedBlock> {
    let path = path.as_ref();
    let mut file = BufReader::new(File::open(path)?);
    info!(path = %path.display(), "Decoding block");
    let block = decode(&mut file, channels)?;
    debug!(samples = block.total_samples(), "Block decoded");
    Ok(block)
}
