//! Tracing and logging setup
//!
//! One subscriber per process: an `EnvFilter` (from `RUST_LOG`, else built from
//! [`TracingConfig`]) over a plain or JSON `fmt` layer.

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::Environment;

/// Targets that are noisy at the base level
const QUIET_TARGETS: &[(&str, Level)] = &[
    ("sqlx::query", Level::WARN),
    ("tower_governor", Level::WARN),
    ("hyper", Level::WARN),
];

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Base level for every target not listed in `directives`
    pub level: Level,
    /// Per-target overrides, e.g. `("interaction_service", Level::DEBUG)`
    pub directives: Vec<(String, Level)>,
    /// Emit one JSON object per event
    pub json: bool,
    /// Log span close events with their busy/idle time
    pub span_timings: bool,
    /// Include source file and line
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            directives: quiet_directives(),
            json: false,
            span_timings: false,
            file_line: true,
        }
    }
}

fn quiet_directives() -> Vec<(String, Level)> {
    QUIET_TARGETS
        .iter()
        .map(|(target, level)| ((*target).to_string(), *level))
        .collect()
}

impl TracingConfig {
    /// Debug output for the interaction crates, readable text
    #[must_use]
    pub fn development() -> Self {
        let mut directives = quiet_directives();
        directives.extend(
            ["interaction_api", "interaction_service", "interaction_db"]
                .into_iter()
                .map(|target| (target.to_string(), Level::DEBUG)),
        );

        Self {
            level: Level::INFO,
            directives,
            json: false,
            span_timings: true,
            file_line: true,
        }
    }

    /// JSON at info level for log shippers
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            directives: quiet_directives(),
            json: true,
            span_timings: false,
            file_line: false,
        }
    }

    /// Preset matching the deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => Self::default(),
        }
    }

    /// Filter string equivalent to this config, in `RUST_LOG` syntax
    #[must_use]
    pub fn filter(&self) -> String {
        std::iter::once(self.level.to_string().to_lowercase())
            .chain(
                self.directives
                    .iter()
                    .map(|(target, level)| format!("{target}={}", level.to_string().to_lowercase())),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn fmt_layer<S>(config: &TracingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let span_events = if config.span_timings {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_span_events(span_events);

    if config.json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Install the global subscriber
///
/// `RUST_LOG`, when set, replaces the configured filter entirely. Calling this
/// twice is not fatal; the second call reports [`TracingError::AlreadyInitialized`].
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer(config))
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_sqlx() {
        let filter = TracingConfig::default().filter();
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("sqlx::query=warn"));
    }

    #[test]
    fn test_development_enables_debug_for_own_crates() {
        let config = TracingConfig::development();
        let filter = config.filter();
        assert!(filter.contains("interaction_service=debug"));
        assert!(filter.contains("interaction_db=debug"));
        assert!(!config.json);
        assert!(config.span_timings);
    }

    #[test]
    fn test_environment_presets() {
        assert!(TracingConfig::for_environment(Environment::Production).json);
        assert!(!TracingConfig::for_environment(Environment::Production).file_line);
        assert!(!TracingConfig::for_environment(Environment::Staging).json);
        assert!(TracingConfig::for_environment(Environment::Development).span_timings);
    }

    #[test]
    fn test_second_init_reports_already_initialized() {
        let config = TracingConfig::default();
        let _ = try_init_tracing(&config);
        assert!(matches!(
            try_init_tracing(&config),
            Err(TracingError::AlreadyInitialized)
        ));
    }
}
