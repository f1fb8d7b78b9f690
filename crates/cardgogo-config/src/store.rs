//! The in-memory configuration store and its typed accessors.
//!
//! A [`ConfigStore`] is a plain owned key→value map with a small fixed
//! accessor surface on top. It is created one of two mutually exclusive
//! ways: [`ConfigStore::new`] seeds the default set, and
//! [`ConfigStore::from_reader`] parses a stream and seeds nothing. Accessors
//! never mutate; after construction the only mutation path is [`set`].
//!
//! [`set`]: ConfigStore::set

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::codec;
use crate::error::ConfigError;

/// Number of grade-0 cards the scheduler hands out per batch.
pub const KEY_GRADE_0_ITEMS_AT_ONCE: &str = "grade_0_items_at_once";
/// Whether the review queue is sorted by interval.
pub const KEY_SORTING: &str = "sorting";
/// Whether review statistics are logged for upload.
pub const KEY_LOGGING: &str = "logging";
/// Hour of the day (0–23) at which a new review day begins.
pub const KEY_DAY_STARTS_AT: &str = "day_starts_at";

/// The default set seeded by [`ConfigStore::new`]. Values are stored as
/// text, exactly as they appear in a persisted file.
const DEFAULT_ENTRIES: [(&str, &str); 4] = [
    (KEY_GRADE_0_ITEMS_AT_ONCE, "10"),
    (KEY_SORTING, "1"),
    (KEY_LOGGING, "1"),
    (KEY_DAY_STARTS_AT, "3"),
];

/// In-memory key/value configuration for the mobile flashcard companion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    entries: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Creates a store pre-populated with the default set: exactly the four
    /// entries `grade_0_items_at_once=10`, `sorting=1`, `logging=1`, and
    /// `day_starts_at=3`.
    pub fn new() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Creates a store by parsing `key=value\n` records from `reader`.
    ///
    /// No defaults are seeded; an empty stream yields an empty store. Later
    /// records overwrite earlier ones with the same key, and loading stops
    /// cleanly at end-of-stream or at the first record without `=`
    /// (see [`codec::read_entries`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the stream fails for any reason
    /// other than ordinary end-of-stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let entries = codec::read_entries(reader)?;
        Ok(Self { entries })
    }

    /// Writes every entry as a `key=value\n` record, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Write`] if the stream rejects a write.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ConfigError> {
        codec::write_entries(writer, &self.entries)
    }

    // ── Typed accessors ───────────────────────────────────────────────────────

    /// How many grade-0 cards to schedule at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotNumeric`] when the stored value is not a
    /// base-10 integer or the key is absent.
    pub fn grade_0_items_at_once(&self) -> Result<i32, ConfigError> {
        self.int_value(KEY_GRADE_0_ITEMS_AT_ONCE)
    }

    /// Hour at which a new review day begins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotNumeric`] when the stored value is not a
    /// base-10 integer or the key is absent.
    pub fn day_starts_at(&self) -> Result<i32, ConfigError> {
        self.int_value(KEY_DAY_STARTS_AT)
    }

    /// Whether review logging is enabled. `false` only when the stored value
    /// is exactly `"0"`; an absent key counts as enabled.
    pub fn logging(&self) -> bool {
        self.flag_value(KEY_LOGGING)
    }

    /// Whether queue sorting is enabled. Same contract as [`logging`].
    ///
    /// [`logging`]: ConfigStore::logging
    pub fn sorting(&self) -> bool {
        self.flag_value(KEY_SORTING)
    }

    // ── Raw access ────────────────────────────────────────────────────────────
    //
    // Escape hatch for the embedding application. Callers must not rely on
    // keys beyond the four documented ones.

    /// Returns the raw textual value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Iterates over all entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Accessor plumbing ─────────────────────────────────────────────────────

    fn int_value(&self, key: &'static str) -> Result<i32, ConfigError> {
        match self.entries.get(key) {
            Some(value) => value.parse().map_err(|_| ConfigError::NotNumeric {
                key,
                value: Some(value.clone()),
            }),
            None => Err(ConfigError::NotNumeric { key, value: None }),
        }
    }

    fn flag_value(&self, key: &str) -> bool {
        // Anything other than the literal "0" counts as enabled, including
        // an absent key and strings like "false".
        self.entries.get(key).map_or(true, |value| value != "0")
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
