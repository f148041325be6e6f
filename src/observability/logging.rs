//! Log subscriber setup for the `ghostwake` binary.
//!
//! Verbosity flags only raise this crate's own targets; dependencies stay
//! at `warn` so `-vvv` traces the phase machine without drowning it in
//! runtime noise. `GHOSTWAKE_LOG_LEVEL` replaces the computed filter
//! entirely and accepts any `EnvFilter` directive list.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that replaces the verbosity-derived filter.
pub const LOG_LEVEL_ENV: &str = "GHOSTWAKE_LOG_LEVEL";

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Compact lines for a person at the terminal.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Filter directives for `-v` repetitions.
///
/// Without flags everything logs at `warn`. Each `-v` raises the
/// `ghostwake` target one level (`info`, `debug`, `trace`).
#[must_use]
pub fn directives_for(verbosity: u8) -> String {
    let own = match verbosity {
        0 => return "warn".to_owned(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,{}={own}", env!("CARGO_CRATE_NAME"))
}

/// Builds the filter from an optional override and the verbosity count.
///
/// An override that fails to parse is ignored in favour of the flags.
fn build_filter(override_directives: Option<&str>, verbosity: u8) -> EnvFilter {
    override_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(directives_for(verbosity)))
}

fn wants_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Installs the global subscriber writing to stderr.
///
/// Later calls are ignored, which keeps tests that log harmless.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let override_directives = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = build_filter(override_directives.as_deref(), verbosity);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Human => builder.with_ansi(wants_ansi(color)).compact().try_init(),
        LogFormat::Json => builder.with_ansi(false).json().try_init(),
    };
}
