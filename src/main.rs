//! tunesort - command-line entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tunesort::cli::Args;

fn main() -> Result<()> {
    // Invalid --src/--out fail here, before anything is touched.
    let args = Args::parse();

    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    tunesort::runtime::run(&args)?;
    Ok(())
}
