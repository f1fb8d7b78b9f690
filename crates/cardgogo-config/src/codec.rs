//! Line-oriented codec for the persisted configuration format.
//!
//! Wire format:
//! ```text
//! key=value\n
//! key=value\n
//! ...
//! ```
//! One entry per line, terminated by a single `\n` (never `\r\n`). The first
//! `=` in a record separates key from value; any further `=` bytes belong to
//! the value. Neither field is escaped, so the only byte a value can never
//! carry is the newline itself.
//!
//! # End-of-input convention
//!
//! Historically the format has no explicit terminator: readers stop at the
//! first record that contains no `=`, treating it the same as running out of
//! bytes. [`read_entries`] preserves that convention for compatibility with
//! configuration files already in the field. A record without `=` (or a
//! truncated trailing record) is therefore *not* an error; it ends the load
//! and everything parsed before it is kept. End-of-stream is additionally
//! checked on every single byte read, so a stream that simply runs dry can
//! never spin the parser.

use std::collections::BTreeMap;
use std::io::{BufReader, Read, Write};

use tracing::warn;

use crate::error::ConfigError;

/// Parses `key=value\n` records from `reader` until the stream is exhausted
/// or a record without `=` is encountered.
///
/// Later records overwrite earlier ones with the same key. The returned map
/// iterates in sorted key order.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the underlying read fails for any reason
/// other than ordinary end-of-stream.
///
/// # Examples
///
/// ```rust
/// use cardgogo_config::codec::read_entries;
///
/// let entries = read_entries(&b"sorting=1\nlogging=0\n"[..]).unwrap();
/// assert_eq!(entries.get("sorting").map(String::as_str), Some("1"));
/// assert_eq!(entries.get("logging").map(String::as_str), Some("0"));
/// ```
pub fn read_entries<R: Read>(reader: R) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut entries = BTreeMap::new();
    let mut bytes = BufReader::new(reader).bytes();

    loop {
        let mut name: Vec<u8> = Vec::new();
        let mut value: Vec<u8> = Vec::new();
        let mut saw_separator = false;

        // Accumulate one record. EOF is checked on every byte so a stream
        // with no trailing newline terminates cleanly instead of spinning.
        let terminated = loop {
            match bytes.next() {
                None => break false,
                Some(Err(e)) => return Err(ConfigError::Read(e)),
                Some(Ok(b'\n')) => break true,
                Some(Ok(b'=')) if !saw_separator => saw_separator = true,
                Some(Ok(b)) if saw_separator => value.push(b),
                Some(Ok(b)) => name.push(b),
            }
        };

        // A record that never reached `=` signals end of input, whether it
        // came from a real EOF or from a separator-less line. Anything
        // accumulated for it is discarded, matching the files in the field.
        if !terminated || !saw_separator {
            if !name.is_empty() || !value.is_empty() {
                warn!(
                    discarded_bytes = name.len() + value.len(),
                    "config load stopped on an incomplete record"
                );
            }
            return Ok(entries);
        }

        entries.insert(into_text(name), into_text(value));
    }
}

/// Writes every entry of `entries` as a `key=value\n` record, in map
/// iteration order (sorted by key).
///
/// No escaping is performed; a value containing `\n` will not survive a
/// round trip. That is an accepted limitation of the format.
///
/// # Errors
///
/// Returns [`ConfigError::Write`] if the underlying write fails.
pub fn write_entries<W: Write>(
    mut writer: W,
    entries: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    for (key, value) in entries {
        writer
            .write_all(format!("{key}={value}\n").as_bytes())
            .map_err(ConfigError::Write)?;
    }
    Ok(())
}

/// Converts accumulated record bytes to a `String`.
///
/// The format carries no encoding declaration; files are expected to be
/// UTF-8 in practice, and anything else is mapped to replacement characters
/// rather than rejected (the format does no unicode validation).
fn into_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
