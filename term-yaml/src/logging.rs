//! Logging configuration for term-yaml.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. [`setup::init_logging`] is a convenience for binaries.

use tracing::Level;

/// Controls how much detail the assembler logs.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether to log every merged parameter of every check
    pub log_check_details: bool,
    /// Maximum length for logged field values (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_check_details: false,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging suite definitions.
    pub fn verbose() -> Self {
        Self {
            log_check_details: true,
            max_field_length: 1024,
        }
    }

    /// Picks the preset matching a subscriber level.
    ///
    /// DEBUG and TRACE get [`LogConfig::verbose`], WARN and ERROR get
    /// [`LogConfig::production`], INFO keeps the default.
    pub fn for_level(level: Level) -> Self {
        if level >= Level::DEBUG {
            Self::verbose()
        } else if level <= Level::WARN {
            Self::production()
        } else {
            Self::default()
        }
    }

    /// Creates a minimal configuration for production.
    pub fn production() -> Self {
        Self {
            log_check_details: false,
            max_field_length: 128,
        }
    }
}

/// Truncates a string to at most `max_length` bytes, on a character boundary.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        return value.to_string();
    }
    let end = value
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|index| *index <= max_length)
        .last()
        .unwrap_or(0);
    format!("{}...(truncated)", &value[..end])
}

/// Utilities for installing a `tracing` subscriber.
pub mod setup {
    use tracing::Level;

    /// Configuration for the global subscriber.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for everything outside term-yaml
        pub level: Level,
        /// Log level for term-yaml itself
        pub crate_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::WARN,
                crate_level: Level::INFO,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        pub fn with_crate_level(mut self, level: Level) -> Self {
            self.crate_level = level;
            self
        }

        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            match &self.env_filter {
                Some(filter) => filter.clone(),
                None => format!(
                    "{},term_yaml={}",
                    self.level.as_str().to_lowercase(),
                    self.crate_level.as_str().to_lowercase()
                ),
            }
        }
    }

    /// Installs a global `fmt` subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use term_yaml::logging::setup::{init_logging, LoggingConfig};
    ///
    /// init_logging(LoggingConfig::default().with_json_format(true)).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::setup::LoggingConfig;
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert!(!config.log_check_details);
        assert_eq!(config.max_field_length, 256);
    }

    #[test]
    fn test_log_config_presets() {
        assert!(LogConfig::verbose().log_check_details);
        assert_eq!(LogConfig::production().max_field_length, 128);
    }

    #[test]
    fn test_log_config_for_level() {
        assert!(LogConfig::for_level(Level::TRACE).log_check_details);
        assert!(LogConfig::for_level(Level::DEBUG).log_check_details);
        assert_eq!(LogConfig::for_level(Level::INFO).max_field_length, 256);
        assert_eq!(LogConfig::for_level(Level::WARN).max_field_length, 128);
        assert!(!LogConfig::for_level(Level::ERROR).log_check_details);
    }

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("hello", 10), "hello");
        assert_eq!(
            truncate_field("this is a very long text", 10),
            "this is a ...(truncated)"
        );
        // Never splits a multi-byte character
        assert_eq!(truncate_field("ééééé", 3), "é...(truncated)");
    }

    #[test]
    fn test_env_filter() {
        assert_eq!(LoggingConfig::default().env_filter(), "warn,term_yaml=info");
        assert_eq!(
            LoggingConfig::default()
                .with_level(Level::ERROR)
                .with_crate_level(Level::TRACE)
                .env_filter(),
            "error,term_yaml=trace"
        );
        assert_eq!(
            LoggingConfig::default()
                .with_env_filter("term_yaml=debug")
                .env_filter(),
            "term_yaml=debug"
        );
    }
}
