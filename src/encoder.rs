//! Synthesizes the samples of every channel and interleaves them into a block

use std::{
    fs::File,
    io::{BufWriter, Seek, Write},
    path::Path,
};

use byte_slice_cast::AsByteSlice;
use tracing::{debug, info};

use crate::{
    channel::SortedChannels,
    codec::encode_value,
    error::{ConfigError, Result},
    header::BlockHeader,
    schedule, Sample, SAMPLE_SIZE,
};

/// Check that a run is non-empty and fits the tick counter and the block length field,
/// returning the payload size
fn plan(channels: &SortedChannels, start: u32, duration: u32) -> Result<i32> {
    if channels.is_empty() {
        return Err(ConfigError::NoChannels.into());
    }
    if duration == 0 {
        return Err(ConfigError::ZeroDuration.into());
    }
    if start.checked_add(duration).is_none() {
        return Err(ConfigError::TickOverflow { start, duration }.into());
    }
    let bytes = schedule::block_size(channels, start, duration);
    i32::try_from(bytes).map_err(|_| ConfigError::BlockTooLarge { bytes }.into())
}

/// Write the block for ticks `[start, start + duration)` to `out`, returning the block length
pub fn encode<W: Write + Seek>(
    start: u32,
    duration: u32,
    channels: &SortedChannels,
    out: &mut W,
) -> Result<i32> {
    let planned = plan(channels, start, duration)?;
    encode_planned(start, duration, channels, out, planned)
}

fn encode_planned<W: Write + Seek>(
    start: u32,
    duration: u32,
    channels: &SortedChannels,
    out: &mut W,
    planned: i32,
) -> Result<i32> {
    // Length is unknown until the payload is out, patch it afterwards
    BlockHeader::new(start, 0).write_to(out)?;
    let mut block_len = 0i32;
    let mut row: Vec<Sample> = Vec::with_capacity(channels.len());
    for tick in start..start + duration {
        row.clear();
        row.extend(
            schedule::emitting(channels, tick).map(|c| encode_value(c.id, tick, c.divisor)),
        );
        out.write_all(row.as_byte_slice())?;
        block_len += (row.len() * SAMPLE_SIZE) as i32;
    }
    debug_assert_eq!(block_len, planned);
    BlockHeader::patch_block_length(out, block_len)?;
    out.flush()?;
    Ok(block_len)
}

/// Create (or truncate) the file at `path` and encode into it
pub fn encode_file<P: AsRef<Path>>(
    path: P,
    start: u32,
    duration: u32,
    channels: &SortedChannels,
) -> Result<i32> {
    let path = path.as_ref();
    // Fail on bad runs before the file exists
    let planned = plan(channels, start, duration)?;
    let mut file = BufWriter::new(File::create(path)?);
    info!(path = %path.display(), start, duration, "Encoding block");
    let block_len = encode_planned(start, duration, channels, &mut file, planned)?;
    file.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    debug!(block_len, "Block written");
    Ok(block_len)
}
