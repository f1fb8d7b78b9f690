//! # cardgogo-config
//!
//! Persistent configuration store for the CardGogo mobile flashcard
//! companion. Settings are plain text, one `key=value` record per line, and
//! this crate owns everything about them:
//!
//! - **`store`** – The in-memory [`ConfigStore`]: a key→value map seeded
//!   with a fixed default set, plus typed accessors for the handful of keys
//!   the scheduler actually reads (integer batch sizes, boolean flags).
//!
//! - **`codec`** – The line-oriented parser and serializer for the
//!   `key=value\n` format, including its historical end-of-input
//!   convention (loading stops at the first record without `=`).
//!
//! - **`storage`** – File persistence: resolving the platform config
//!   directory and reading/writing the config file through the codec.
//!
//! The surrounding application (scheduler, UI) is an external collaborator;
//! for the stream API it opens and closes the streams itself. Everything
//! here is synchronous, single-threaded, blocking I/O.

pub mod codec;
pub mod error;
pub mod storage;
pub mod store;

// Re-export the most-used items at the crate root so callers can write
// `cardgogo_config::ConfigStore` instead of the full path.
pub use codec::{read_entries, write_entries};
pub use error::ConfigError;
pub use storage::{load_config, load_config_from, save_config, save_config_to, StorageError};
pub use store::ConfigStore;
