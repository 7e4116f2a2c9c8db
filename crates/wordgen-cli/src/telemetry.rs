use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target of the run reports that `--verbose` asks for.
pub const REPORT_TARGET: &str = "wordgen::report";

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so they never mix with words written to stdout. The
/// filter comes from `RUST_LOG` when set; otherwise verbose runs log at
/// `info` and quiet runs only surface warnings and errors. Verbose runs always
/// enable [`REPORT_TARGET`] at `info` on top of whatever `RUST_LOG` says.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "info" } else { "warn" };
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());
    if verbose {
        filter = filter.add_directive(format!("{REPORT_TARGET}=info").parse()?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_thread_names(true)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
