use std::{cmp::Ordering, io::Write};

use tracing::instrument;

use super::{ParsedId, datetime, format_duration, rfc3339};

/// Prints which of two KSUIDs is older and by how much.
///
/// Ids from the same second are ordered by payload; the report says so
/// rather than calling one of them older.
#[instrument(level = "debug", skip(out))]
pub fn compare<W: Write>(first: &str, second: &str, out: &mut W) -> anyhow::Result<()> {
    let a = ParsedId::parse(first)?.ksuid;
    let b = ParsedId::parse(second)?.ksuid;

    writeln!(out, "KSUID 1: {a}")?;
    writeln!(out, "  Datetime: {}", rfc3339(&a))?;
    writeln!(out)?;
    writeln!(out, "KSUID 2: {b}")?;
    writeln!(out, "  Datetime: {}", rfc3339(&b))?;
    writeln!(out)?;

    let verdict = match (a.cmp(&b), a.timestamp().cmp(&b.timestamp())) {
        (Ordering::Equal, _) => "KSUIDs are identical",
        (Ordering::Less, Ordering::Equal) => "KSUID 1 sorts before KSUID 2 (same second)",
        (Ordering::Greater, Ordering::Equal) => "KSUID 1 sorts after KSUID 2 (same second)",
        (Ordering::Less, _) => "KSUID 1 is older than KSUID 2",
        (Ordering::Greater, _) => "KSUID 1 is newer than KSUID 2",
    };
    writeln!(out, "Result: {verdict}")?;

    let delta = (datetime(&b) - datetime(&a)).abs();
    writeln!(out, "Time difference: {}", format_duration(delta))?;
    Ok(())
}
