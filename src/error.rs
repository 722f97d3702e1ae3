//! Error types for recording and playing back a block

use std::{fmt, io};

use thiserror::Error;

/// Configuration problems, all correctable by the caller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot register more than {max} channels")]
    TooManyChannels { max: usize },
    #[error("channel {id}: frequency {frequency}Hz exceeds the base frequency {base}Hz")]
    FrequencyTooHigh { id: u32, frequency: u32, base: u32 },
    #[error("channel {id}: frequency must be non-zero")]
    ZeroFrequency { id: u32 },
    #[error("channel {id} is registered twice")]
    DuplicateChannel { id: u32 },
    #[error("data file name not specified")]
    MissingPath,
    #[error("no channels specified")]
    NoChannels,
    #[error("block duration not specified")]
    ZeroDuration,
    #[error("start {start} + duration {duration} overflows the tick counter")]
    TickOverflow { start: u32, duration: u32 },
    #[error("block of {bytes} bytes does not fit the block length field")]
    BlockTooLarge { bytes: u64 },
}

/// Which part of the file ran out early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    StartTime,
    BlockLength,
    /// Payload with this many bytes still expected
    Payload { remaining: i32 },
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::StartTime => write!(f, "start time"),
            Section::BlockLength => write!(f, "block length"),
            Section::Payload { remaining } => {
                write!(f, "payload ({} bytes still expected)", remaining)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("file truncated while reading the {0}")]
    Truncated(Section),
    #[error("invalid block length {0} in header")]
    InvalidBlockLength(i32),
    #[error("channel {id}: sample {index} decoded as {actual:08x}, expected {expected:08x}")]
    Mismatch {
        id: u32,
        index: usize,
        expected: i32,
        actual: i32,
    },
    #[error("channel {id}: decoded {actual} samples, expected {expected}")]
    CountMismatch {
        id: u32,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Process exit code reported by the command line tool for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(ConfigError::MissingPath) => 5,
            Error::Config(ConfigError::NoChannels) => 6,
            Error::Config(ConfigError::ZeroDuration) => 7,
            Error::Config(_) => 3,
            Error::Io(_) => 4,
            Error::Truncated(Section::StartTime) => 10,
            Error::Truncated(Section::BlockLength) | Error::InvalidBlockLength(_) => 11,
            Error::Truncated(Section::Payload { .. }) => 12,
            Error::Mismatch { .. } | Error::CountMismatch { .. } => 13,
        }
    }

    /// Turn a short read into [`Error::Truncated`], pass anything else through
    pub(crate) fn from_read(err: io::Error, section: Section) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated(section)
        } else {
            Error::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_config_condition() {
        let codes = [
            Error::from(ConfigError::MissingPath).exit_code(),
            Error::from(ConfigError::NoChannels).exit_code(),
            Error::from(ConfigError::ZeroDuration).exit_code(),
        ];
        assert_eq!(codes, [5, 6, 7]);
    }

    #[test]
    fn test_short_read_is_truncation() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(
            Error::from_read(eof, Section::BlockLength),
            Error::Truncated(Section::BlockLength)
        ));
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            Error::from_read(denied, Section::StartTime),
            Error::Io(_)
        ));
    }
}
