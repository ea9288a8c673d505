use once_cell::sync::Lazy;
use regex::Regex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// JSON string fields whose values never reach the logs
static SENSITIVE_JSON_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(password|username|api_key|apiKey|secret|token|access_token|accessToken|refresh_token|authorization)"\s*:\s*"[^"]*""#,
    )
    .expect("sensitive field pattern is valid")
});

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init(),
    }

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
}

/// Redact credential-like string values in a JSON document
pub fn redact_json_sensitive_fields(json: &str) -> String {
    SENSITIVE_JSON_FIELD
        .replace_all(json, r#""${1}": "[REDACTED]""#)
        .into_owned()
}

/// Truncate long strings for logging
pub fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...[truncated {} bytes]", &s[..cut], s.len() - cut)
}
