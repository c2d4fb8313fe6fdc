//! # Keys
//!
//! A key is a root note plus major/minor. Its job in the chord engine is to
//! decide whether black-key notes are spelled with flats or sharps when chords
//! are rendered.
//!
//! Key names follow the note syntax: `C`, `F#m`, `Bbmaj`, `Fism`, `Es`. A key is
//! minor when the text after the note starts with `m` but not with `maj`.

use crate::error::ChordError;
use crate::note::{normalize, Note};
use crate::style::NotationStyle;
use std::fmt;
use std::str::FromStr;

/// Musical key (root + mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key {
    pub note: Note,
    pub is_minor: bool,
}

impl Key {
    pub fn new(note: Note, is_minor: bool) -> Self {
        Self { note, is_minor }
    }

    /// Parse a key name like "G", "F#m" or "Bbmaj"
    ///
    /// # Example
    /// ```
    /// use wordslive::{Key, NotationStyle};
    ///
    /// let key = Key::parse("F#m", NotationStyle::default())?;
    /// assert_eq!(key.note.semitones_from_c(), 6);
    /// assert!(key.is_minor);
    /// # Ok::<(), wordslive::ChordError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`ChordError::InvalidKeyName`] when `name` holds no note name.
    pub fn parse(name: &str, style: NotationStyle) -> Result<Self, ChordError> {
        let m = Note::parse(name, style).ok_or_else(|| ChordError::InvalidKeyName(name.to_string()))?;
        let is_minor = m.rest.starts_with('m') && !m.rest.starts_with("maj");
        let key = Self::new(m.note, is_minor);
        tracing::debug!(name, ?key, "parsed key");
        Ok(key)
    }

    /// Whether accidentals in this key are spelled as flats.
    ///
    /// Minor keys follow their relative major. Flat keys are Db, Eb, F, Gb, Ab
    /// and Bb (and Bbm, Cm, Dm, Ebm, Fm, Gm).
    pub fn is_flat(&self) -> bool {
        let shift = if self.is_minor { 3 } else { 0 };
        let mut k = normalize(self.note.semitones_from_c() as i32 + shift);
        if k > 5 {
            k += 1;
        }
        k % 2 == 1
    }

    /// Same mode, root shifted by `amount` semitones
    pub fn transpose(&self, amount: i32) -> Self {
        Self::new(self.note.transpose(amount), self.is_minor)
    }

    /// Upward distance in semitones (0..=11) from this key's root to `other`'s
    pub fn semitones_to(&self, other: &Key) -> i32 {
        normalize(other.note.semitones_from_c() as i32 - self.note.semitones_from_c() as i32) as i32
    }

    /// Render the key name, with the root spelled the way the key itself spells it
    pub fn name(&self, style: NotationStyle) -> String {
        let root = self.note.name(self, style);
        if self.is_minor {
            format!("{}m", root)
        } else {
            root.to_string()
        }
    }
}

impl FromStr for Key {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, NotationStyle::default())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name(NotationStyle::default()))
    }
}
