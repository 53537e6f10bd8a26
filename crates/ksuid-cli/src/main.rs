use std::io::{self, BufWriter, Write};

use clap::Parser;
use ksuid_cli::{
    commands,
    config::{CliArgs, Config},
    telemetry::init_telemetry,
};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = Config::try_from(CliArgs::parse())?;
    init_telemetry()?;
    tracing::debug!(?config, "starting ksuid");

    let mut out = BufWriter::new(io::stdout().lock());
    commands::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
