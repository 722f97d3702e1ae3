use channel_slurper::{
    args::{convert_filter, Args},
    codec::HexSamples,
    Result, Session,
};
use clap::Parser;
use tracing::error;

fn run(args: &Args) -> Result<()> {
    let session = Session::new(args.config())?;
    println!(
        "Start at {}ms, Duration {}ms",
        session.start_time(),
        session.duration()
    );
    for c in session.channels().iter() {
        println!("Channel {:02}: {} Hz", c.id, c.frequency());
    }
    let block = session.run()?;
    for out in &block.channels {
        println!(
            "Channel {} {}Hz {}",
            out.id,
            out.frequency,
            HexSamples(&out.samples)
        );
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(convert_filter(args.verbose.log_level_filter()))
        .init();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
