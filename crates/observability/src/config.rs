//! Environment-driven logging configuration.

/// Env var holding the `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised falls back to JSON.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure instead of
    /// touching the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = lookup(FORMAT_ENV)
            .map(|v| LogFormat::parse_lenient(&v))
            .unwrap_or_default();

        Self { filter, format }
    }
}
