//! Error type for configuration streaming and typed access.

use thiserror::Error;

/// Errors surfaced by the configuration store.
///
/// Only two failure kinds exist: the underlying stream broke, or a typed
/// integer accessor found something that is not an integer. A record without
/// `=` during load is deliberately *not* an error; it ends the load (see
/// [`crate::codec::read_entries`]).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input stream failed mid-read. Ordinary end-of-stream never
    /// produces this; it terminates the load cleanly.
    #[error("failed to read config stream: {0}")]
    Read(#[source] std::io::Error),

    /// The output stream rejected a write.
    #[error("failed to write config stream: {0}")]
    Write(#[source] std::io::Error),

    /// An integer accessor found a non-numeric value, or no value at all.
    /// `value` is `None` when the key was absent from the store.
    #[error(
        "config key `{key}` is not a valid integer: {}",
        .value.as_deref().unwrap_or("<missing>")
    )]
    NotNumeric {
        key: &'static str,
        value: Option<String>,
    },
}
