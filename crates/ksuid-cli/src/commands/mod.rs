//! Subcommand implementations. Each writes its report to the given writer so
//! it can be captured in tests.

mod benchmark;
mod compare;
mod generate;
mod inspect;

use std::io::Write;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use ksuid::{Alphabet, Base36, Ksuid};

pub use benchmark::*;
pub use compare::*;
pub use generate::*;
pub use inspect::*;

use crate::{config::Config, prefix::PrefixedKsuid};

/// Runs the configured subcommand.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    match config {
        Config::Generate(config) => generate(config, out),
        Config::Inspect { id } => inspect(id, out),
        Config::Compare { first, second } => compare(first, second, out),
        Config::Benchmark(config) => benchmark(config, out),
    }
}

/// A KSUID read from user input, with the prefix it carried, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedId {
    pub prefix: Option<String>,
    pub ksuid: Ksuid,
}

impl ParsedId {
    /// Accepts `prefix_<ksuid>`, 31-character base36 or 27-character base62.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        if input.contains('_') {
            let prefixed = PrefixedKsuid::parse(input)
                .with_context(|| format!("invalid prefixed KSUID {input:?}"))?;
            return Ok(Self {
                prefix: Some(prefixed.prefix().to_owned()),
                ksuid: prefixed.ksuid(),
            });
        }

        let ksuid = if input.len() == Base36::WIDTH {
            Ksuid::from_base36(input)
        } else {
            Ksuid::from_string(input)
        }
        .with_context(|| format!("invalid KSUID {input:?}"))?;

        Ok(Self {
            prefix: None,
            ksuid,
        })
    }
}

pub(crate) fn datetime(id: &Ksuid) -> DateTime<Utc> {
    DateTime::<Utc>::from(id.datetime())
}

pub(crate) fn rfc3339(id: &Ksuid) -> String {
    datetime(id).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Renders a duration as `[-][Nd ]HHh MMm SSs`.
pub fn format_duration(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (mins, secs) = (rem / 60, rem % 60);

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {mins:02}m {secs:02}s")
    } else {
        format!("{sign}{hours:02}h {mins:02}m {secs:02}s")
    }
}
