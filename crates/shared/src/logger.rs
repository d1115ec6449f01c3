//! Logger port for dependency injection

use std::collections::HashMap;

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Build a meta map from key/value pairs
pub fn meta<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<String, String>
where
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect()
}

/// Logger that forwards to `tracing`, meta attached as a structured field
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        match meta {
            Some(meta) => tracing::debug!(meta = ?meta, "{}", message),
            None => tracing::debug!("{}", message),
        }
    }

    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        match meta {
            Some(meta) => tracing::info!(meta = ?meta, "{}", message),
            None => tracing::info!("{}", message),
        }
    }

    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        match meta {
            Some(meta) => tracing::warn!(meta = ?meta, "{}", message),
            None => tracing::warn!("{}", message),
        }
    }

    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>) {
        match meta {
            Some(meta) => tracing::error!(meta = ?meta, "{}", message),
            None => tracing::error!("{}", message),
        }
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}
