//! `tracing` setup for the `gridspan` binary.
//!
//! Events go to stderr; stdout is reserved for plan reports and generated
//! grid files. `RUST_LOG` filters (default `info`) and `GRIDSPAN_LOG_FORMAT`
//! picks `human` or `json` output.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "GRIDSPAN_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Rendering of log events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text.
    #[default]
    Human,
    /// One JSON object per line, with the enclosing spans attached.
    Json,
}

impl LogFormat {
    /// Reads [`LOG_FORMAT_ENV`], falling back to [`LogFormat::Human`] when it
    /// is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::FormatNotUnicode`] or
    /// [`LoggingError::UnknownFormat`].
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::FormatNotUnicode { source })
            }
        }
    }

    fn layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE);
        match self {
            Self::Human => layer.boxed(),
            Self::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat { value }),
        }
    }
}

/// Failures while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `GRIDSPAN_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("GRIDSPAN_LOG_FORMAT is not valid UTF-8: {source}")]
    FormatNotUnicode {
        /// Error from [`std::env::var`].
        #[source]
        source: env::VarError,
    },
    /// `GRIDSPAN_LOG_FORMAT` named neither `human` nor `json`.
    #[error("GRIDSPAN_LOG_FORMAT=`{value}` is not one of `human`, `json`")]
    UnknownFormat {
        /// Normalised value that was rejected.
        value: String,
    },
    /// The global subscriber slot was already taken.
    #[error("could not set the global tracing subscriber: {source}")]
    Install {
        /// Error from `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs the global subscriber once per process.
///
/// Later calls return `Ok(())` without touching the installed subscriber.
/// A subscriber installed by someone else is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] cannot be used.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;
    match install(format) {
        Ok(()) | Err(LoggingError::Install { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // `log` records are forwarded only if no other logger claimed the facade.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(format.layer())
        .try_init()
        .map_err(|source| LoggingError::Install { source })
}
