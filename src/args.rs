//! Argument parsing for running from the command line

use std::path::PathBuf;

use clap::Parser;

use crate::session::RecorderConfig;

/// A `<ID>,<FREQUENCY>` channel definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelArg {
    pub id: u32,
    pub frequency: u32,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// File to write the block to and read it back from
    #[clap(short, long)]
    pub file: Option<PathBuf>,
    /// Start time in ticks (ms)
    #[clap(short, long, default_value_t = 0)]
    pub start: u32,
    /// Block duration in ticks (ms)
    #[clap(short, long, default_value_t = 0)]
    pub duration: u32,
    /// Channel as <ID>,<FREQUENCY>, repeat for more channels (at most 100)
    #[clap(short, long = "channel", value_parser = valid_channel)]
    pub channels: Vec<ChannelArg>,
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    pub fn config(&self) -> RecorderConfig {
        RecorderConfig {
            start_time: self.start,
            duration: self.duration,
            channels: self.channels.iter().map(|c| (c.id, c.frequency)).collect(),
            output: self.file.clone(),
        }
    }
}

/// Match verbosity filter with tracing subscriber log levels
pub fn convert_filter(filter: log::LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    match filter {
        log::LevelFilter::Off => tracing_subscriber::filter::LevelFilter::OFF,
        log::LevelFilter::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        log::LevelFilter::Warn => tracing_subscriber::filter::LevelFilter::WARN,
        log::LevelFilter::Info => tracing_subscriber::filter::LevelFilter::INFO,
        log::LevelFilter::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
        log::LevelFilter::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
    }
}

fn valid_channel(s: &str) -> Result<ChannelArg, String> {
    let (id, frequency) = s
        .split_once(',')
        .ok_or_else(|| "Expected <ID>,<FREQUENCY>".to_string())?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("Invalid channel id {:?}", id))?;
    let frequency = frequency
        .trim()
        .parse()
        .map_err(|_| format!("Invalid frequency {:?}", frequency))?;
    Ok(ChannelArg { id, frequency })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_channel() {
        assert_eq!(
            valid_channel("0,1000"),
            Ok(ChannelArg {
                id: 0,
                frequency: 1000
            })
        );
        assert!(valid_channel("0").is_err());
        assert!(valid_channel("x,10").is_err());
        assert!(valid_channel("1,-5").is_err());
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "channel_slurper",
            "-f",
            "data.dat",
            "-s",
            "456438",
            "-d",
            "3",
            "-c",
            "0,1000",
            "-c",
            "1,200",
            "--channel",
            "2,500",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.start_time, 456438);
        assert_eq!(config.duration, 3);
        assert_eq!(config.channels, vec![(0, 1000), (1, 200), (2, 500)]);
        assert_eq!(config.output, Some(PathBuf::from("data.dat")));
    }

    #[test]
    fn test_defaults_leave_validation_to_session() {
        let args = Args::try_parse_from(["channel_slurper"]).unwrap();
        let config = args.config();
        assert_eq!(config.duration, 0);
        assert!(config.channels.is_empty());
        assert!(config.output.is_none());
    }
}
