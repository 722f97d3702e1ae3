//! Simulated multi-channel data acquisition recorder.
//!
//! Channels sample at integer sub-rates of a fixed base rate. Every sample of
//! a run is interleaved into one block without any framing, so reading a block
//! back relies on the decoder deriving exactly the schedule the encoder used.

pub mod args;
pub mod channel;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod header;
pub mod schedule;
pub mod session;

pub use channel::{ChannelDescriptor, ChannelRegistry, SortedChannels};
pub use decoder::{decode, decode_file, ChannelOutput, DecodedBlock};
pub use encoder::{encode, encode_file};
pub use error::{ConfigError, Error, Result, Section};
pub use header::BlockHeader;
pub use session::{RecorderConfig, Session};

/// Ticks per second, every channel frequency divides into this
pub const BASE_FREQUENCY: u32 = 1000;
/// Bytes per sample on disk
pub const SAMPLE_SIZE: usize = 4;
/// Upper bound on registered channels
pub const MAX_CHANNELS: usize = 100;

pub type Sample = i32;
