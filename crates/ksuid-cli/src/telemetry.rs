use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Output on stdout is the tool's
/// result, so diagnostics stay quiet unless asked for.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr through `tracing_subscriber::fmt`, filtered by
/// `RUST_LOG` (e.g. `RUST_LOG=ksuid=trace` to see decode and generation
/// spans from the library).
pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()?;
    Ok(())
}
