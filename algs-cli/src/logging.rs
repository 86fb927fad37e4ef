//! Logging initialisation for the algs CLI.
//!
//! Diagnostics go to `stderr` through a global `tracing` subscriber so the
//! rendered graph, reachability, or union-find output on `stdout` stays clean.
//! `RUST_LOG` selects the level (default `info`) and `ALGS_LOG_FORMAT` picks
//! `human` or `json` records.

use std::{env, ffi::OsString, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_ENV: &str = "ALGS_LOG_FORMAT";

static INITIALISED: OnceLock<LogFormat> = OnceLock::new();

/// Output format for log records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Human,
    /// Newline-delimited JSON records.
    Json,
}

impl LogFormat {
    /// Reads the format from `ALGS_LOG_FORMAT`, defaulting to [`Self::Human`]
    /// when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] for any value other than
    /// `human` or `json`, including values that are not valid Unicode.
    pub fn from_env() -> Result<Self, LoggingError> {
        env::var_os(LOG_FORMAT_ENV).map_or(Ok(Self::default()), Self::from_os)
    }

    fn from_os(raw: OsString) -> Result<Self, LoggingError> {
        match raw.into_string() {
            Ok(text) => text.parse(),
            Err(raw) => Err(LoggingError::UnsupportedFormat {
                provided: raw.to_string_lossy().into_owned(),
            }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "" | "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat { provided: normalised }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ALGS_LOG_FORMAT` named something other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user, lowercased.
        provided: String,
    },
}

/// Installs the global subscriber once and returns the format in use.
///
/// Later calls return the format chosen by the first. If another subscriber
/// already owns the global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when `ALGS_LOG_FORMAT` holds an unsupported value.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INITIALISED.get() {
        return Ok(*format);
    }
    let format = LogFormat::from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Human => layer.boxed(),
    };
    // A subscriber installed elsewhere (for example by a test harness) wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
    Ok(*INITIALISED.get_or_init(|| format))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::lowercase("human", LogFormat::Human)]
    #[case::blank("", LogFormat::Human)]
    #[case::padded(" json ", LogFormat::Json)]
    #[case::mixed_case("Json", LogFormat::Json)]
    fn supported_formats_parse(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[rstest]
    #[case::xml("xml", "xml")]
    #[case::shouting(" LOGFMT ", "logfmt")]
    fn unknown_formats_are_rejected(#[case] raw: &str, #[case] reported: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format is unsupported");
        let LoggingError::UnsupportedFormat { provided } = &err;
        assert_eq!(provided, reported);
        assert!(err.to_string().contains("expected `human` or `json`"));
    }

    #[rstest]
    fn repeated_initialisation_keeps_first_format() {
        let first = init_logging().expect("logging must initialise");
        assert_eq!(init_logging().expect("later calls are no-ops"), first);
    }
}
