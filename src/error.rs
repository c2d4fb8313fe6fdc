//! # Error Types
//!
//! This module defines the error type for the chord engine.
//!
//! Only operator input produces errors. Scanned lyric text never does: a note
//! that cannot be parsed ends the note sequence, and an unterminated `[` ends
//! chord scanning, both silently.
//!
//! ## Error Types
//! - `InvalidKeyName` - the "original key" given for a transposition has no note name
//! - `ConfigError` - the YAML notation style configuration is malformed
//! - `OutputError` - a result could not be rendered (YAML chord listing)
//! - `Io` - reading or writing lyric files from the command line failed
//!
//! ## Usage
//! ```rust
//! use wordslive::{transpose_chords, ChordError, NotationStyle};
//!
//! match transpose_chords("[C]Amazing [G]grace", "xyz", 2, NotationStyle::default()) {
//!     Ok(text) => println!("{}", text),
//!     Err(ChordError::InvalidKeyName(name)) => eprintln!("Unknown key '{}'", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The key name does not start with (or contain) a note name.
    ///
    /// # Example
    /// ```
    /// # use wordslive::ChordError;
    /// let err = ChordError::InvalidKeyName("xyz".to_string());
    /// assert_eq!(err.to_string(), "Invalid key name: xyz");
    /// ```
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    /// Invalid notation style configuration.
    ///
    /// # Example
    /// ```
    /// # use wordslive::ChordError;
    /// let err = ChordError::ConfigError("german-notation: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: german-notation: invalid type");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Rendering a result (such as the YAML chord listing) failed.
    ///
    /// # Example
    /// ```
    /// # use wordslive::ChordError;
    /// let err = ChordError::OutputError("unsupported value".to_string());
    /// assert_eq!(err.to_string(), "Failed to render output: unsupported value");
    /// ```
    #[error("Failed to render output: {0}")]
    OutputError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
