//! Fixed size block header.
//!
//! ```text
//! offset 0: start_time   u32
//! offset 4: block_length i32, payload bytes following the header
//! offset 8: payload
//! ```
//! Everything is native endian.

use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::{Error, Result, Section};

pub const HEADER_SIZE: usize = 8;
/// Where the block length lives, so it can be patched once the payload is written
pub const BLOCK_LENGTH_OFFSET: u64 = 4;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct BlockHeader {
    pub start_time: u32,
    pub block_length: i32,
}

impl BlockHeader {
    pub fn new(start_time: u32, block_length: i32) -> Self {
        Self {
            start_time,
            block_length,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.start_time.to_ne_bytes())?;
        out.write_all(&self.block_length.to_ne_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        let mut word = [0u8; 4];
        input
            .read_exact(&mut word)
            .map_err(|e| Error::from_read(e, Section::StartTime))?;
        let start_time = u32::from_ne_bytes(word);
        input
            .read_exact(&mut word)
            .map_err(|e| Error::from_read(e, Section::BlockLength))?;
        let block_length = i32::from_ne_bytes(word);
        Ok(Self::new(start_time, block_length))
    }

    /// Overwrite the block length of a header already at the start of `out`,
    /// leaving the cursor at the end of the stream
    pub fn patch_block_length<W: Write + Seek>(out: &mut W, block_length: i32) -> Result<()> {
        out.seek(SeekFrom::Start(BLOCK_LENGTH_OFFSET))?;
        out.write_all(&block_length.to_ne_bytes())?;
        out.seek(SeekFrom::End(0))?;
        Ok(())
    }
}
