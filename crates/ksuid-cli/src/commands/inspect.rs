use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::instrument;

use super::{ParsedId, datetime, format_duration, rfc3339};

/// Prints the components of `id`.
#[instrument(level = "debug", skip(out))]
pub fn inspect<W: Write>(id: &str, out: &mut W) -> anyhow::Result<()> {
    inspect_at(id, Utc::now(), out)
}

/// Same as [`inspect`], with the reference time used for the age line.
pub fn inspect_at<W: Write>(id: &str, now: DateTime<Utc>, out: &mut W) -> anyhow::Result<()> {
    let ParsedId { prefix, ksuid } = ParsedId::parse(id)?;

    writeln!(out, "KSUID:      {ksuid}")?;
    writeln!(out, "Base36:     {}", ksuid.to_base36())?;
    if let Some(prefix) = prefix {
        writeln!(out, "Prefix:     {prefix}")?;
    }
    writeln!(out, "Timestamp:  {}", ksuid.timestamp())?;
    writeln!(out, "Datetime:   {}", rfc3339(&ksuid))?;
    writeln!(out, "Payload:    {}", hex::encode(ksuid.payload()))?;
    writeln!(out, "Raw bytes:  {}", hex::encode(ksuid.as_bytes()))?;
    writeln!(out, "Age:        {}", format_duration(now - datetime(&ksuid)))?;
    Ok(())
}
