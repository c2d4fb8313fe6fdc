//! # Public API
//!
//! String-in, string-out entry points used by the song editor, the lyrics
//! formatter and the search indexer.
//!
//! ## Functions
//!
//! - [`strip_chords()`] - Remove all chord annotations
//! - [`pretty_print_chords()`] - Show accidentals inside chords as `♭`/`♯`
//! - [`transpose_chords()`] - Transpose every chord by a number of semitones
//! - [`transpose_chords_to()`] - Transpose every chord from one key to another
//! - [`parse_key()`] / [`parse_note()`] - Validate operator input
//! - [`list_chords()`] / [`list_chords_yaml()`] - All chord annotations with their positions
//! - [`searchable_text()`] - Plain text for the search index
//!
//! ## Typical Usage
//!
//! ```rust
//! use wordslive::{transpose_chords, NotationStyle};
//!
//! let lyrics = "[G]Amazing [G7]grace, how [C]sweet [G]the sound";
//! let style = NotationStyle::default();
//!
//! let in_a = transpose_chords(lyrics, "G", 2, style)?;
//! assert_eq!(in_a, "[A]Amazing [A7]grace, how [D]sweet [A]the sound");
//! # Ok::<(), wordslive::ChordError>(())
//! ```

use crate::chords;
use crate::{ChordError, ChordSymbol, Key, NotationStyle, Note};

/// Remove every `[Chord]` annotation, keeping the surrounding text.
///
/// # Example
/// ```rust
/// use wordslive::strip_chords;
///
/// assert_eq!(strip_chords("Swing low, sweet [C]chari[Am7/G]ot"), "Swing low, sweet chariot");
/// assert_eq!(strip_chords("a [b c"), "a [b c");
/// ```
pub fn strip_chords(text: &str) -> String {
    chords::remove_all(text)
}

/// Replace ASCII `b`/`#` inside chord annotations with `♭`/`♯`.
pub fn pretty_print_chords(text: &str) -> String {
    chords::pretty_print(text)
}

/// Transpose every chord in `text` by `amount` semitones.
///
/// `original_key` is the key the song is written in; it decides together with
/// `amount` whether the result is spelled with flats or sharps. `amount` may be
/// negative and is taken modulo 12.
///
/// # Errors
/// Returns [`ChordError::InvalidKeyName`] if `original_key` contains no note name.
pub fn transpose_chords(
    text: &str,
    original_key: &str,
    amount: i32,
    style: NotationStyle,
) -> Result<String, ChordError> {
    let key = Key::parse(original_key, style)?;
    Ok(chords::transpose(text, &key, amount, style))
}

/// Transpose every chord in `text` from `from_key` up to `to_key`.
///
/// # Example
/// ```rust
/// use wordslive::{transpose_chords_to, NotationStyle};
///
/// let text = transpose_chords_to("[Am]Kyrie [F]eleison", "Am", "Cm", NotationStyle::default())?;
/// assert_eq!(text, "[Cm]Kyrie [Ab]eleison");
/// # Ok::<(), wordslive::ChordError>(())
/// ```
///
/// # Errors
/// Returns [`ChordError::InvalidKeyName`] if either key name contains no note name.
pub fn transpose_chords_to(
    text: &str,
    from_key: &str,
    to_key: &str,
    style: NotationStyle,
) -> Result<String, ChordError> {
    let from = Key::parse(from_key, style)?;
    let to = Key::parse(to_key, style)?;
    Ok(chords::transpose(text, &from, from.semitones_to(&to), style))
}

/// Parse a key name such as "D", "Ebm" or "Fis".
///
/// # Errors
/// Returns [`ChordError::InvalidKeyName`] when no note name is found.
pub fn parse_key(name: &str, style: NotationStyle) -> Result<Key, ChordError> {
    Key::parse(name, style)
}

/// Parse the first note name in `name`, or `None` if there is none.
pub fn parse_note(name: &str, style: NotationStyle) -> Option<Note> {
    Note::parse(name, style).map(|m| m.note)
}

/// Every chord annotation in `text`, in order.
pub fn list_chords(text: &str) -> Vec<ChordSymbol> {
    chords::chords(text).collect()
}

/// Every chord annotation in `text` as a YAML list of `chord`/`position` entries.
///
/// # Errors
/// Returns [`ChordError::OutputError`] if the listing cannot be serialized.
pub fn list_chords_yaml(text: &str) -> Result<String, ChordError> {
    serde_yaml::to_string(&list_chords(text)).map_err(|e| ChordError::OutputError(e.to_string()))
}

/// Lyrics without chords, processed line by line for the search index.
pub fn searchable_text(text: &str) -> String {
    chords::searchable_text(text)
}
